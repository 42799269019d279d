//! # Path-Derived Barton Numbers
//!
//! Gives every source file a reproducible id without manual assignment.
//!
//! ```text
//! 03-diagnostics/submodules/02-errors/ErrorLog.tsx
//! ^^ module             marker ^^ submodule       file = hash(path) mod 99 + 1
//! ```
//!
//! - `module`: leading `NN-` prefix of the first segment, default 1.
//! - `submodule`: leading `NN-` prefix of the segment after the marker
//!   segment, default 1.
//! - `file`: 32-bit polynomial hash of the whole path, folded into `1..=99`.
//!
//! The result is deterministic but not unique.

use shared_types::HierarchicalId;

/// Segment that introduces a submodule directory.
pub const DEFAULT_SUBMODULE_MARKER: &str = "submodules";

/// Rolling string hash with 32-bit wraparound: `h = (h << 5) - h + unit`
/// over the UTF-16 code units of `input`.
pub fn path_hash(input: &str) -> i32 {
    input.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

/// Fold a path hash into the valid file range `1..=99`.
pub fn file_number(input: &str) -> u32 {
    path_hash(input).unsigned_abs() % 99 + 1
}

/// Parse a leading `NN-` prefix. Prefixes too large for `u32` saturate,
/// so the resulting id is out of range rather than defaulted.
fn leading_number(segment: &str) -> Option<u32> {
    let (digits, _) = segment.split_once('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

/// Derive `(module, submodule, file)` from a slash-delimited path.
///
/// The path is used exactly as given: a leading `./` or `/` makes the first
/// segment `.` or empty, so the module falls back to 1. Callers normalize
/// paths before this point if they want otherwise.
pub fn derive_segments(path: &str, submodule_marker: &str) -> (u32, u32, u32) {
    let segments: Vec<&str> = path.split('/').collect();

    let module = segments
        .first()
        .and_then(|s| leading_number(s))
        .unwrap_or(1);

    let submodule = segments
        .iter()
        .position(|s| *s == submodule_marker)
        .and_then(|i| segments.get(i + 1))
        .and_then(|s| leading_number(s))
        .unwrap_or(1);

    (module, submodule, file_number(path))
}

/// Derive a full Barton number from a path.
pub fn id_from_path(path: &str, submodule_marker: &str) -> HierarchicalId {
    let (module, submodule, file) = derive_segments(path, submodule_marker);
    HierarchicalId::new(module, submodule, file)
}
