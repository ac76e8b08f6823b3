//! In-place key normalization for raw responses.
//!
//! Responses qualify keys with the domain they were included from
//! (`"entry.name"`, `"build.created_by"`) while the record types declare the
//! flat field names (`name`, `created_by`). [`normalize_keys`] rewrites every
//! mapping in a response tree so that only final segments remain.

use serde_json::Value;
use tracing::trace;

/// Separator between a key's domain qualifier and its field name.
pub const QUALIFIER_DELIMITER: char = '.';

/// Rewrite every qualified key in `value` to its final segment, in place.
///
/// Walks the whole tree depth-first. Object values are normalized whether or
/// not their own key was rewritten, and each element of an array value is
/// normalized in turn; scalars and non-object array elements pass through
/// unchanged. A key without a delimiter keeps its name.
///
/// Keys are visited in a snapshot of the mapping's original order, so renames
/// during the walk are safe. When two qualified keys collapse to the same
/// segment, the one visited later wins and the earlier value is silently
/// dropped; response key order decides the winner.
pub fn normalize_keys(value: &mut Value) {
    match value {
        Value::Object(fields) => {
            let snapshot: Vec<String> = fields.keys().cloned().collect();
            for key in snapshot {
                match key.rsplit_once(QUALIFIER_DELIMITER) {
                    Some((_, segment)) => {
                        if let Some(mut nested) = fields.shift_remove(&key) {
                            normalize_keys(&mut nested);
                            trace!(from = %key, to = %segment, "flattened qualified key");
                            fields.insert(segment.to_string(), nested);
                        }
                    }
                    None => {
                        if let Some(nested) = fields.get_mut(&key) {
                            normalize_keys(nested);
                        }
                    }
                }
            }
        }
        Value::Array(elements) => {
            for element in elements {
                normalize_keys(element);
            }
        }
        _ => {}
    }
}
