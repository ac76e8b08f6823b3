#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Response-to-record binding.
pub mod bind;
/// Record types for artifact-repository search results.
pub mod model;
/// In-place key normalization for raw responses.
pub mod normalize;
/// Timestamp scalar preserving UTC offsets and subsecond precision.
pub mod timestamp;

mod errors;

pub use bind::to_model;
pub use errors::BindError;
pub use model::{
    Archive, Artifact, Build, Dependency, Entry, Item, ItemType, Module, Promotion, Property,
    Release, ReleaseArtifact, Stat,
};
pub use normalize::{normalize_keys, QUALIFIER_DELIMITER};
pub use timestamp::{Timestamp, TimestampParseError};
