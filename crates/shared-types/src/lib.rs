//! # Shared Types Crate
//!
//! Value types used across the Repo Lens workspace.
//!
//! ## Contents
//!
//! - [`HierarchicalId`]: the four-part Barton number
//!   (`blueprint.module.submodule.file`) and its canonical string form.
//! - [`ComponentType`]: the closed set of component kinds.
//! - [`HealthStatus`]: green / yellow / red, plus the dashboard's
//!   presentation lookups.

pub mod barton;
pub mod entities;
pub mod errors;

pub use barton::{HierarchicalId, BLUEPRINT_ID, MAX_SEGMENT, MIN_SEGMENT};
pub use entities::{get_health_color, get_health_icon, ComponentType, HealthStatus};
pub use errors::{ParseBartonError, ParseEnumError};
