//! # Inbound Ports
//!
//! API trait defining what the Doctrine Registry can do.

use shared_types::{ComponentType, HealthStatus, HierarchicalId};

use crate::domain::{
    Component, ComponentRegistration, ComplianceReport, HierarchyNode, ValidationSummary,
};
use crate::error::RegistryError;

/// Doctrine Registry API - inbound port.
///
/// All operations are synchronous and in-memory. Absence is reported as
/// `None`/`false`, never as an error.
pub trait DoctrineRegistryApi: Send + Sync {
    /// Build a Barton number under this deployment's blueprint. Ranges are
    /// not checked.
    fn generate_id(&self, module: u32, submodule: u32, file: u32) -> HierarchicalId;

    /// Register or overwrite a component.
    ///
    /// Health starts as the id's derived health. A parent link appends the
    /// id to the parent's `children`.
    fn register_component(
        &self,
        registration: ComponentRegistration,
    ) -> Result<Component, RegistryError>;

    fn get_component(&self, id: &str) -> Option<Component>;

    /// First component whose canonical string equals `canonical`.
    fn get_component_by_hierarchical_id(&self, canonical: &str) -> Option<Component>;

    fn get_all_components(&self) -> Vec<Component>;

    fn get_components_by_type(&self, component_type: ComponentType) -> Vec<Component>;

    /// Root components with their descendants attached.
    fn get_hierarchy(&self) -> Vec<HierarchyNode>;

    /// Set health and touch `last_updated`. Returns `false` for unknown ids.
    fn update_component_health(&self, id: &str, status: HealthStatus) -> bool;

    fn validate_all_components(&self) -> ValidationSummary;

    /// Derive a reproducible Barton number from a file path.
    fn generate_id_from_path(&self, path: &str) -> HierarchicalId;

    fn export_compliance_report(&self) -> ComplianceReport;
}
