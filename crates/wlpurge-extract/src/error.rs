//! Error types for field extraction

use thiserror::Error;

/// Errors that can occur while extracting a field from a record's textual
/// representation
///
/// All of these are per-extraction conditions; callers treat every variant
/// as "field absent" and continue.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    /// The requested field is not present (or is not a string value)
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// The field name exceeds the lookup length bound
    #[error("Field name too long: {0} bytes (max: {1})")]
    ValueTooLong(usize, usize),

    /// The extracted value exceeds the destination size bound
    #[error("Tag value too long for field '{field}': {len} bytes (max: {max})")]
    TagTooLong {
        /// Field whose value overflowed
        field: String,
        /// Actual value length in bytes
        len: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// The record text is not a flat JSON object
    #[error("Invalid record format: {0}")]
    InvalidFormat(String),
}
