use thiserror::Error;

/// Error returned when a raw response cannot be bound onto a record type.
///
/// Carries the Rust path of the target type alongside the underlying
/// deserialization failure, which names the offending field or shape.
#[derive(Debug, Error)]
#[error("cannot bind response to {type_name}: {source}")]
pub struct BindError {
    /// Full path of the record type the response was bound against.
    pub type_name: &'static str,
    /// Underlying deserialization failure.
    pub source: serde_json::Error,
}
