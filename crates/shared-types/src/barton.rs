//! # Barton Numbers
//!
//! The hierarchical identifier attached to every registered component.
//!
//! ## Canonical Form
//!
//! ```text
//! {blueprint}.{module:02}.{submodule:02}.{file:02}
//!     39     .    01    .     01      .   01
//! ```
//!
//! The blueprint is unpadded; the other three segments are zero-padded to
//! two digits. An id is valid when the blueprint equals [`BLUEPRINT_ID`]
//! and every segment lies in `MIN_SEGMENT..=MAX_SEGMENT`. Validity is
//! checked lazily: construction never fails.

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::entities::HealthStatus;
use crate::errors::ParseBartonError;

/// Blueprint identifier of this deployment.
pub const BLUEPRINT_ID: u32 = 39;

/// Smallest valid module/submodule/file segment.
pub const MIN_SEGMENT: u32 = 1;

/// Largest valid module/submodule/file segment.
pub const MAX_SEGMENT: u32 = 99;

/// A Barton number. Immutable once constructed.
///
/// Serializes as its canonical string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
)]
pub struct HierarchicalId {
    blueprint_id: u32,
    module: u32,
    submodule: u32,
    file: u32,
}

impl HierarchicalId {
    /// Create an id under this deployment's blueprint.
    pub fn new(module: u32, submodule: u32, file: u32) -> Self {
        Self::with_blueprint(BLUEPRINT_ID, module, submodule, file)
    }

    /// Create an id under an arbitrary blueprint.
    pub fn with_blueprint(blueprint_id: u32, module: u32, submodule: u32, file: u32) -> Self {
        Self {
            blueprint_id,
            module,
            submodule,
            file,
        }
    }

    pub fn blueprint_id(&self) -> u32 {
        self.blueprint_id
    }

    pub fn module(&self) -> u32 {
        self.module
    }

    pub fn submodule(&self) -> u32 {
        self.submodule
    }

    pub fn file(&self) -> u32 {
        self.file
    }

    /// `(module, submodule, file)`.
    pub fn segments(&self) -> (u32, u32, u32) {
        (self.module, self.submodule, self.file)
    }

    /// Check the blueprint and the range of every segment.
    pub fn is_valid(&self) -> bool {
        let in_range = |v: u32| (MIN_SEGMENT..=MAX_SEGMENT).contains(&v);

        self.blueprint_id == BLUEPRINT_ID
            && in_range(self.module)
            && in_range(self.submodule)
            && in_range(self.file)
    }

    /// Health derived from validity alone.
    pub fn health(&self) -> HealthStatus {
        if self.is_valid() {
            HealthStatus::Green
        } else {
            HealthStatus::Red
        }
    }

    /// The canonical string, e.g. `"39.01.01.01"`.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HierarchicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}.{:02}.{:02}",
            self.blueprint_id, self.module, self.submodule, self.file
        )
    }
}

impl FromStr for HierarchicalId {
    type Err = ParseBartonError;

    /// Parse a canonical string. Ranges are not checked here; use
    /// [`HierarchicalId::is_valid`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(ParseBartonError::WrongPartCount(parts.len()));
        }

        let mut values = [0u32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseBartonError::InvalidPart((*part).to_string()));
            }
            *slot = part
                .parse()
                .map_err(|_| ParseBartonError::InvalidPart((*part).to_string()))?;
        }

        let [blueprint_id, module, submodule, file] = values;
        Ok(Self::with_blueprint(blueprint_id, module, submodule, file))
    }
}
