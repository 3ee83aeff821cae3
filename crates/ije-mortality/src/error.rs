//! Error types for field catalog construction.

use thiserror::Error;

/// Errors raised while building a [`FieldRegistry`](crate::FieldRegistry).
///
/// These are configuration errors: they can only occur before any record is
/// decoded or encoded, and they mean the field catalog itself is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two fields claim overlapping character ranges.
    #[error("field {second} [{second_start}, {second_end}) overlaps field {first} [{first_start}, {first_end})")]
    Overlap {
        first: &'static str,
        first_start: usize,
        first_end: usize,
        second: &'static str,
        second_start: usize,
        second_end: usize,
    },

    /// The same key is declared twice.
    #[error("duplicate field key: {key}")]
    DuplicateKey { key: &'static str },

    /// A field has zero width.
    #[error("field {key} has zero width")]
    ZeroWidth { key: &'static str },

    /// A field range falls outside the record.
    #[error("field {key} at offset {offset} with width {width} exceeds record length {record_len}")]
    OutOfBounds {
        key: &'static str,
        offset: usize,
        width: usize,
        record_len: usize,
    },
}

/// Result type for registry construction.
pub type Result<T> = std::result::Result<T, RegistryError>;
