//! # Error Types
//!
//! Parse errors for the shared value types.

use thiserror::Error;

/// Errors produced when parsing a canonical Barton number string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBartonError {
    /// The string did not split into exactly four dot-separated parts.
    #[error("Barton number must have 4 dot-separated parts, got {0}")]
    WrongPartCount(usize),

    /// A part was empty or not an unsigned decimal number.
    #[error("Invalid Barton number part: '{0}'")]
    InvalidPart(String),
}

/// Error produced when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    /// Which enum was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}
