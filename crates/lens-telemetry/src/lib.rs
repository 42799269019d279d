//! # Lens Telemetry
//!
//! Logging setup shared by Repo Lens binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lens_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RL_SERVICE_NAME` | `repo-lens` | Service name attached to the startup log line |
//! | `RL_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `RL_JSON_LOGS` | `false` | JSON output (defaults to `true` in containers) |
//! | `RL_CONSOLE_OUTPUT` | `true` | Emit logs at all |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}
