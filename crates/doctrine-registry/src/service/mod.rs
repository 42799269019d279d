//! Registry service layer
//!
//! Holds the component map and applies domain invariants on every mutation.

mod registry_service;

pub use registry_service::DoctrineRegistry;
