//! Registry configuration
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RL_SUBMODULE_MARKER` | `submodules` | Path segment introducing a submodule directory |
//! | `RL_BOOTSTRAP` | `true` | Register the known components at startup |

use std::env;

use serde::{Deserialize, Serialize};

use super::path_id::DEFAULT_SUBMODULE_MARKER;
use crate::error::ConfigError;

/// Doctrine Registry configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Segment that marks a submodule directory in `generate_id_from_path`.
    pub submodule_marker: String,
    /// Whether the runtime registers the known component catalogue on start.
    pub bootstrap_on_start: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            submodule_marker: DEFAULT_SUBMODULE_MARKER.to_string(),
            bootstrap_on_start: true,
        }
    }
}

impl RegistryConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            submodule_marker: env::var("RL_SUBMODULE_MARKER")
                .unwrap_or(defaults.submodule_marker),

            bootstrap_on_start: env::var("RL_BOOTSTRAP")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.bootstrap_on_start),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.submodule_marker.is_empty() {
            return Err(ConfigError::EmptySubmoduleMarker);
        }

        if self.submodule_marker.contains('/') {
            return Err(ConfigError::InvalidSubmoduleMarker(
                self.submodule_marker.clone(),
            ));
        }

        Ok(())
    }
}
