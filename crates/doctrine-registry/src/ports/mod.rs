//! # Ports
//!
//! - `inbound`: what the registry offers to its callers.
//! - `outbound`: what the registry needs from its environment.

pub mod inbound;
pub mod outbound;

pub use inbound::DoctrineRegistryApi;
pub use outbound::{Clock, FixedClock, SystemClock};
