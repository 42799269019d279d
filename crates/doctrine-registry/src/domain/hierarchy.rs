//! # Hierarchy Tree
//!
//! Nested view of the parent/child graph.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{ComponentType, HealthStatus, HierarchicalId};

use super::component::Component;

/// One node of the tree returned by `get_hierarchy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub hierarchical_id: HierarchicalId,
    pub health_status: HealthStatus,
    pub last_updated: DateTime<Utc>,
    pub description: String,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Build a node from a component and its already-assembled children.
    pub fn from_component(component: &Component, children: Vec<HierarchyNode>) -> Self {
        Self {
            id: component.id.clone(),
            name: component.name.clone(),
            component_type: component.component_type,
            hierarchical_id: component.hierarchical_id,
            health_status: component.health_status,
            last_updated: component.last_updated,
            description: component.description.clone(),
            children,
        }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(HierarchyNode::subtree_size).sum::<usize>()
    }

    /// Ids in depth-first pre-order.
    pub fn ids(&self) -> Vec<&str> {
        let mut out = vec![self.id.as_str()];
        for child in &self.children {
            out.extend(child.ids());
        }
        out
    }
}
