//! # Domain Invariants
//!
//! Rules checked before a parent link is established.
//!
//! - A component is never its own parent.
//! - A parent must already be registered.
//! - The parent/child graph stays acyclic, so hierarchy traversal always
//!   terminates.

use std::collections::HashMap;

use super::component::Component;
use crate::error::RegistryError;

/// Check that `id` may be linked under `parent_id` given the current map.
pub fn invariant_valid_parent_link(
    components: &HashMap<String, Component>,
    id: &str,
    parent_id: &str,
) -> Result<(), RegistryError> {
    if id == parent_id {
        return Err(RegistryError::SelfParent(id.to_string()));
    }

    if !components.contains_key(parent_id) {
        return Err(RegistryError::UnknownParent {
            id: id.to_string(),
            parent_id: parent_id.to_string(),
        });
    }

    if is_ancestor_or_self(components, id, parent_id) {
        return Err(RegistryError::CycleDetected {
            id: id.to_string(),
            parent_id: parent_id.to_string(),
        });
    }

    Ok(())
}

/// Walk up from `start` and report whether `candidate` is on the path.
///
/// The walk is bounded by the map size.
pub fn is_ancestor_or_self(
    components: &HashMap<String, Component>,
    candidate: &str,
    start: &str,
) -> bool {
    let mut current = Some(start);
    let mut steps = 0;

    while let Some(node) = current {
        if node == candidate {
            return true;
        }
        if steps > components.len() {
            return true;
        }
        steps += 1;
        current = components.get(node).and_then(|c| c.parent_id.as_deref());
    }

    false
}
