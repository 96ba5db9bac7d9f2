//! Error handling for record adapters.

use crate::reflect::Kind;

/// Errors raised while building a `StructRecord`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructRecordError {
    /// The wrapped value is not a struct, even after one dereference
    #[error("not a struct: {type_name} is a {kind}")]
    NotAStruct {
        /// Kind found after dereferencing
        kind: Kind,
        /// Type that was inspected
        type_name: &'static str,
    },

    /// Two fields map to the same key and duplicates are rejected
    #[error("duplicate key {key:?}: fields {first} and {second}")]
    DuplicateKey {
        /// The colliding key
        key: String,
        /// Field that claimed the key first
        first: &'static str,
        /// Field that tried to claim it again
        second: &'static str,
    },
}

impl StructRecordError {
    /// Whether this is a `NotAStruct` error
    #[must_use]
    pub const fn is_not_a_struct(&self) -> bool {
        matches!(self, Self::NotAStruct { .. })
    }
}

/// Result type for record adapter construction
pub type Result<T> = std::result::Result<T, StructRecordError>;
