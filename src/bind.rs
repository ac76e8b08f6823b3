//! Response-to-record binding.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::BindError;
use crate::normalize::normalize_keys;

/// Bind a raw response onto a record type.
///
/// The whole tree is normalized first ([`normalize_keys`]), then handed to
/// the deserializer in a single pass, so every renaming decision is made
/// against the complete original key set before any field is constructed.
/// Child sequences are bound recursively into their declared record types.
/// On failure nothing partial escapes; the error names the target type and
/// carries the underlying cause.
///
/// Any [`DeserializeOwned`] type works as the target, so callers can bind
/// domains the built-in records do not cover by declaring their own struct.
///
/// # Examples
///
/// ```
/// use aqlmodel::{to_model, Entry};
/// use serde_json::json;
///
/// let entry: Entry = to_model(json!({
///     "entry.name": "App.class",
///     "entry.path": "artifactory/test",
/// }))?;
/// assert_eq!(entry.name.as_deref(), Some("App.class"));
/// # Ok::<(), aqlmodel::BindError>(())
/// ```
pub fn to_model<T>(mut response: Value) -> Result<T, BindError>
where
    T: DeserializeOwned,
{
    normalize_keys(&mut response);
    serde_json::from_value(response).map_err(|source| {
        let error = BindError {
            type_name: std::any::type_name::<T>(),
            source,
        };
        debug!(type_name = error.type_name, reason = %error.source, "response failed to bind");
        error
    })
}
