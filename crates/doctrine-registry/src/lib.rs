//! # Doctrine Registry
//!
//! Registry of Repo Lens components keyed by id and tagged with a Barton
//! number (`39.MM.SS.FF`).
//!
//! ## Purpose
//!
//! - Register components with a type, a Barton number and an optional parent
//! - Look components up by id, by Barton number or by type
//! - Assemble the parent/child hierarchy
//! - Track health (green / yellow / red) per component
//! - Validate Barton numbers and export ORBT compliance reports
//!
//! ## Module Structure
//!
//! ```text
//! doctrine-registry/
//! ├── domain/      # Component, HierarchyNode, reports, invariants, path ids, config
//! ├── ports/       # DoctrineRegistryApi (inbound), Clock (outbound)
//! ├── service/     # DoctrineRegistry
//! ├── bootstrap.rs # Known component catalogue
//! └── metrics.rs   # Activity counters
//! ```

#![warn(clippy::all)]

pub mod bootstrap;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports
pub use bootstrap::{auto_register_known_components, known_component_count};
pub use domain::{
    derive_segments, file_number, id_from_path, path_hash, Component, ComponentRegistration,
    ComplianceEntry, ComplianceReport, HealthSummary, HierarchyNode, RegistryConfig,
    ValidationSummary, DEFAULT_SUBMODULE_MARKER,
};
pub use error::{ConfigError, RegistryError};
pub use metrics::{MetricsSnapshot, RegistryMetrics};
pub use ports::{Clock, DoctrineRegistryApi, FixedClock, SystemClock};
pub use service::DoctrineRegistry;
pub use shared_types::{
    get_health_color, get_health_icon, ComponentType, HealthStatus, HierarchicalId, BLUEPRINT_ID,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
