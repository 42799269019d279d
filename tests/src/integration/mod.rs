//! # Integration Flows
//!
//! - `registry_flows`: registration, linkage and hierarchy scenarios
//! - `compliance_flows`: validation and report aggregation
//! - `concurrency`: one registry shared across threads

pub mod compliance_flows;
pub mod concurrency;
pub mod registry_flows;
