//! # Component Records
//!
//! The registry entry and the request used to create one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{ComponentType, HealthStatus, HierarchicalId};

/// A registered component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Unique key, supplied by the caller.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub hierarchical_id: HierarchicalId,
    /// Id of the parent component, if any.
    pub parent_id: Option<String>,
    /// Ids of direct children, in link order. Never contains duplicates.
    pub children: Vec<String>,
    pub health_status: HealthStatus,
    pub last_updated: DateTime<Utc>,
    pub description: String,
}

impl Component {
    /// Canonical Barton number string.
    pub fn canonical_string(&self) -> String {
        self.hierarchical_id.canonical()
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Input to [`register_component`](crate::ports::DoctrineRegistryApi::register_component).
///
/// ```rust,ignore
/// let registration = ComponentRegistration::new("error-log-page", "Error Log", ComponentType::Page, 1, 2, 4)
///     .with_description("Synthetic diagnostic log viewer")
///     .with_parent("pages");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRegistration {
    pub id: String,
    pub name: String,
    pub component_type: ComponentType,
    pub module: u32,
    pub submodule: u32,
    pub file: u32,
    pub description: String,
    pub parent_id: Option<String>,
}

impl ComponentRegistration {
    /// Create a registration with no parent and an empty description.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        component_type: ComponentType,
        module: u32,
        submodule: u32,
        file: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            component_type,
            module,
            submodule,
            file,
            description: String::new(),
            parent_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}
