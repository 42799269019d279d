//! # Domain Module
//!
//! Core types for the Doctrine Registry.

pub mod component;
pub mod config;
pub mod hierarchy;
pub mod invariants;
pub mod path_id;
pub mod report;

pub use component::*;
pub use config::*;
pub use hierarchy::*;
pub use invariants::*;
pub use path_id::*;
pub use report::*;
