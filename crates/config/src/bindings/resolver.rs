//! Resolution of binding sets into UI-ready bindings.
//!
//! Responsibilities:
//! - Walk a dotted path through the settings tree to a binding set.
//! - Drop bindings whose action is not registered for the context.
//! - Split alternatives and expand single characters to canonical key names.
//!
//! Invariants:
//! - Output order follows authored order; alternates keep their order.
//! - No deduplication of keys or actions.
//! - An empty key part fails the whole call; nothing partial is returned.

use super::{BindingError, BindingSet, ResolvedBinding};
use crate::keybind::character_to_key;
use crate::settings::{SettingsField, SettingsNode};

/// Resolve the binding set at `path` (e.g. `"dashboard.bindings"`).
///
/// A path that does not exist, or that does not end at a binding set,
/// resolves to an empty list.
pub fn resolve_bindings(
    root: &dyn SettingsNode,
    path: &str,
) -> Result<Vec<ResolvedBinding>, BindingError> {
    let mut current = SettingsField::Node(root);
    for segment in path.split('.') {
        let SettingsField::Node(node) = current else {
            return Ok(Vec::new());
        };
        match node.get_field(segment) {
            Some(field) => current = field,
            None => return Ok(Vec::new()),
        }
    }

    match current {
        SettingsField::Bindings(set) => resolve_set(set),
        _ => Ok(Vec::new()),
    }
}

/// Resolve every binding of `set` against its registry.
pub fn resolve_set(set: &dyn BindingSet) -> Result<Vec<ResolvedBinding>, BindingError> {
    let registry = set.registry();
    let mut resolved = Vec::new();

    for spec in set.specs() {
        let Some(description) = registry.describe(&spec.action) else {
            tracing::trace!(
                context = registry.context(),
                action = %spec.action,
                "Dropping binding for unregistered action"
            );
            continue;
        };

        let joined = spec.key.joined(&spec.action)?;
        for part in joined.split(',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(BindingError::EmptyKey {
                    binding: joined.clone(),
                });
            }
            resolved.push(ResolvedBinding {
                key: expand_key(part),
                action: spec.action.clone(),
                description,
                show: spec.show,
            });
        }
    }

    Ok(resolved)
}

fn expand_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => character_to_key(c),
        _ => key.to_string(),
    }
}
