//! Utility helpers: JSON formatting and file I/O for workflow documents.
pub mod files;
pub mod serialization;

pub use serialization::{to_pretty_json, PrettyJsonSerializer, Serializer};
