//! # Doctrine Registry Service
//!
//! Owns the component graph and implements [`DoctrineRegistryApi`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! let registry = Arc::new(DoctrineRegistry::new());
//!
//! registry.register_component(
//!     ComponentRegistration::new("repo-lens", "Repo Lens", ComponentType::Module, 1, 1, 1),
//! )?;
//! registry.register_component(
//!     ComponentRegistration::new("pages", "Pages", ComponentType::Submodule, 1, 2, 1)
//!         .with_parent("repo-lens"),
//! )?;
//!
//! let report = registry.export_compliance_report();
//! ```
//!
//! ## Concurrency
//!
//! One instance is shared per process (or per request scope) behind an
//! `Arc`. Every operation takes the single map lock for its whole duration,
//! so a registration and its parent-link side effect are applied atomically.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use shared_types::{ComponentType, HealthStatus, HierarchicalId};
use tracing::{debug, info, warn};

use crate::domain::{
    id_from_path, invariant_valid_parent_link, Component, ComponentRegistration,
    ComplianceReport, HierarchyNode, RegistryConfig, ValidationSummary,
};
use crate::error::RegistryError;
use crate::metrics::{MetricsSnapshot, RegistryMetrics};
use crate::ports::{Clock, DoctrineRegistryApi, SystemClock};

/// In-memory registry of components keyed by id.
pub struct DoctrineRegistry {
    /// Registered components by id.
    components: RwLock<HashMap<String, Component>>,
    config: RegistryConfig,
    clock: Arc<dyn Clock>,
    metrics: RegistryMetrics,
}

impl DoctrineRegistry {
    /// Create an empty registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create with an injected time source.
    pub fn with_clock(config: RegistryConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            components: RwLock::new(HashMap::new()),
            config,
            clock,
            metrics: RegistryMetrics::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.components.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.read().is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.components.read().contains_key(id)
    }

    /// Direct children of `id`, in link order.
    pub fn get_children(&self, id: &str) -> Vec<Component> {
        let components = self.components.read();
        components
            .get(id)
            .map(|parent| {
                parent
                    .children
                    .iter()
                    .filter_map(|child| components.get(child).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn reject(&self, err: RegistryError) -> Result<Component, RegistryError> {
        warn!("[Registry] ✗ Registration rejected: {}", err);
        self.metrics.record_rejection();
        Err(err)
    }

    /// Components ordered by Barton number, then id.
    fn sorted(components: &HashMap<String, Component>) -> Vec<&Component> {
        let mut all: Vec<&Component> = components.values().collect();
        all.sort_by(|a, b| {
            a.hierarchical_id
                .cmp(&b.hierarchical_id)
                .then_with(|| a.id.cmp(&b.id))
        });
        all
    }

    fn build_node(components: &HashMap<String, Component>, component: &Component) -> HierarchyNode {
        let children = component
            .children
            .iter()
            .filter_map(|child_id| components.get(child_id))
            .map(|child| Self::build_node(components, child))
            .collect();

        HierarchyNode::from_component(component, children)
    }
}

impl Default for DoctrineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctrineRegistryApi for DoctrineRegistry {
    fn generate_id(&self, module: u32, submodule: u32, file: u32) -> HierarchicalId {
        HierarchicalId::new(module, submodule, file)
    }

    fn register_component(
        &self,
        registration: ComponentRegistration,
    ) -> Result<Component, RegistryError> {
        let ComponentRegistration {
            id,
            name,
            component_type,
            module,
            submodule,
            file,
            description,
            parent_id,
        } = registration;

        if id.is_empty() {
            return self.reject(RegistryError::EmptyId);
        }

        let hierarchical_id = self.generate_id(module, submodule, file);
        let mut components = self.components.write();

        if let Some(parent) = parent_id.as_deref() {
            if let Err(e) = invariant_valid_parent_link(&components, &id, parent) {
                drop(components);
                return self.reject(e);
            }
        }

        // Children keep pointing at this id, so an overwrite keeps them.
        let (children, old_parent) = match components.get(&id) {
            Some(existing) => {
                warn!("[Registry] Component {} already registered, replacing", id);
                (existing.children.clone(), existing.parent_id.clone())
            }
            None => (Vec::new(), None),
        };
        let overwrite = components.contains_key(&id);

        if old_parent != parent_id {
            if let Some(old) = old_parent.as_deref().and_then(|p| components.get_mut(p)) {
                old.children.retain(|child| child != &id);
            }
        }

        if let Some(parent) = parent_id.as_deref().and_then(|p| components.get_mut(p)) {
            if !parent.children.contains(&id) {
                parent.children.push(id.clone());
            }
        }

        let component = Component {
            id: id.clone(),
            name,
            component_type,
            hierarchical_id,
            parent_id,
            children,
            health_status: hierarchical_id.health(),
            last_updated: self.clock.now(),
            description,
        };

        if hierarchical_id.is_valid() {
            info!(
                "[Registry] ✓ Registered {} ({}) as {}",
                component.id, component.component_type, hierarchical_id
            );
        } else {
            warn!(
                "[Registry] Registered {} with invalid Barton number {}",
                component.id, hierarchical_id
            );
        }

        components.insert(id, component.clone());
        self.metrics.record_registration(overwrite);

        Ok(component)
    }

    fn get_component(&self, id: &str) -> Option<Component> {
        self.metrics.record_lookup();
        let found = self.components.read().get(id).cloned();
        debug!("[Registry] Lookup {} -> {}", id, found.is_some());
        found
    }

    fn get_component_by_hierarchical_id(&self, canonical: &str) -> Option<Component> {
        self.metrics.record_lookup();
        let components = self.components.read();
        Self::sorted(&components)
            .into_iter()
            .find(|c| c.canonical_string() == canonical)
            .cloned()
    }

    fn get_all_components(&self) -> Vec<Component> {
        let components = self.components.read();
        Self::sorted(&components).into_iter().cloned().collect()
    }

    fn get_components_by_type(&self, component_type: ComponentType) -> Vec<Component> {
        let components = self.components.read();
        Self::sorted(&components)
            .into_iter()
            .filter(|c| c.component_type == component_type)
            .cloned()
            .collect()
    }

    fn get_hierarchy(&self) -> Vec<HierarchyNode> {
        let components = self.components.read();
        Self::sorted(&components)
            .into_iter()
            .filter(|c| c.is_root())
            .map(|root| Self::build_node(&components, root))
            .collect()
    }

    fn update_component_health(&self, id: &str, status: HealthStatus) -> bool {
        let mut components = self.components.write();
        let Some(component) = components.get_mut(id) else {
            debug!("[Registry] Health update for unknown component {}", id);
            return false;
        };

        component.health_status = status;
        component.last_updated = self.clock.now();
        self.metrics.record_health_update();
        debug!("[Registry] {} health -> {}", id, status);
        true
    }

    fn validate_all_components(&self) -> ValidationSummary {
        let components = self.components.read();
        let mut summary = ValidationSummary::default();
        for component in Self::sorted(&components) {
            summary.record(component);
        }
        summary
    }

    fn generate_id_from_path(&self, path: &str) -> HierarchicalId {
        id_from_path(path, &self.config.submodule_marker)
    }

    fn export_compliance_report(&self) -> ComplianceReport {
        let components = self.get_all_components();
        let report = ComplianceReport::from_components(&components);
        info!(
            "[Registry] Compliance report: {} components, {} invalid",
            report.total_components, report.validation.invalid
        );
        report
    }
}
