//! Error types for the Doctrine Registry

use thiserror::Error;

/// Errors returned by registry mutations.
///
/// Invalid Barton numbers are never errors: they are stored with a red
/// health status and surface through validation and compliance reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Parent component not found: {parent_id} (while registering {id})")]
    UnknownParent { id: String, parent_id: String },

    #[error("Component cannot be its own parent: {0}")]
    SelfParent(String),

    #[error("Linking {id} under {parent_id} would create a cycle")]
    CycleDetected { id: String, parent_id: String },

    #[error("Component id must not be empty")]
    EmptyId,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Submodule marker must not be empty")]
    EmptySubmoduleMarker,

    #[error("Submodule marker must be a single path segment: '{0}'")]
    InvalidSubmoduleMarker(String),
}
