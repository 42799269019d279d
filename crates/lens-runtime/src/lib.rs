//! # Repo Lens Runtime
//!
//! Owns the process-wide [`DoctrineRegistry`] and answers CLI commands.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (environment, then CLI flags)
//! 2. Initialize logging
//! 3. Validate the registry configuration
//! 4. Register the known component catalogue (unless disabled)
//! 5. Execute the requested command and print JSON

pub mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use doctrine_registry::{
    auto_register_known_components, DoctrineRegistry, DoctrineRegistryApi, HierarchicalId,
    RegistryConfig,
};
use serde_json::{json, Value};
use tracing::info;

use crate::cli::Command;

/// Result of a command: the JSON body and whether it succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub body: Value,
    pub success: bool,
}

impl CommandOutput {
    fn ok(body: Value) -> Self {
        Self {
            body,
            success: true,
        }
    }
}

/// The runtime orchestrating one registry instance.
pub struct LensRuntime {
    registry: Arc<DoctrineRegistry>,
}

impl LensRuntime {
    /// Create a runtime with an empty registry.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid registry configuration")?;

        Ok(Self {
            registry: Arc::new(DoctrineRegistry::with_config(config)),
        })
    }

    /// Register the known component catalogue if configured to.
    pub fn start(&self) -> Result<()> {
        if !self.registry.config().bootstrap_on_start {
            info!("Bootstrap disabled, starting with an empty registry");
            return Ok(());
        }

        let count = auto_register_known_components(self.registry.as_ref())
            .context("Failed to register known components")?;
        info!("Registry ready with {} components", count);
        Ok(())
    }

    pub fn registry(&self) -> Arc<DoctrineRegistry> {
        Arc::clone(&self.registry)
    }

    /// Run one command against the registry.
    pub fn execute(&self, command: &Command) -> Result<CommandOutput> {
        let registry = self.registry.as_ref();

        let output = match command {
            Command::Report => {
                CommandOutput::ok(serde_json::to_value(registry.export_compliance_report())?)
            }

            Command::Hierarchy => CommandOutput::ok(serde_json::to_value(registry.get_hierarchy())?),

            Command::Validate => {
                let summary = registry.validate_all_components();
                let success = summary.is_compliant();
                CommandOutput {
                    body: json!({
                        "valid": summary.valid,
                        "invalid": summary.invalid,
                        "errors": summary.errors,
                        "compliancePercentage": summary.compliance_percentage(),
                    }),
                    success,
                }
            }

            Command::List { component_type } => {
                let components = match component_type {
                    Some(t) => registry.get_components_by_type(*t),
                    None => registry.get_all_components(),
                };
                CommandOutput::ok(serde_json::to_value(components)?)
            }

            Command::Lookup { barton } => {
                let id: HierarchicalId = barton
                    .parse()
                    .with_context(|| format!("Invalid Barton number '{}'", barton))?;

                match registry.get_component_by_hierarchical_id(&id.canonical()) {
                    Some(component) => CommandOutput::ok(json!({
                        "icon": component.health_status.icon(),
                        "color": component.health_status.color(),
                        "component": component,
                    })),
                    None => CommandOutput {
                        body: Value::Null,
                        success: false,
                    },
                }
            }

            Command::IdFromPath { paths } => {
                let rows: Vec<Value> = paths
                    .iter()
                    .map(|path| {
                        let id = registry.generate_id_from_path(path);
                        json!({
                            "path": path,
                            "canonicalString": id.canonical(),
                            "valid": id.is_valid(),
                        })
                    })
                    .collect();
                CommandOutput::ok(Value::Array(rows))
            }

            Command::Metrics => CommandOutput::ok(serde_json::to_value(self.registry.metrics())?),
        };

        Ok(output)
    }
}
