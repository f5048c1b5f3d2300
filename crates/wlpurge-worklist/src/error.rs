//! Error types for worklist reading and directory scanning

use std::path::PathBuf;
use thiserror::Error;

/// Per-candidate failure while reading one worklist file
///
/// Never process-fatal: the scanner logs the condition, skips the file and
/// continues with the next candidate.
#[derive(Error, Debug)]
pub enum ReadError {
    /// File could not be read from disk
    #[error("Failed to read worklist file: {0}")]
    Io(#[from] std::io::Error),

    /// Decoder rejected the file's bytes
    #[error("Failed to decode worklist file: {0}")]
    Decode(String),

    /// Decoded text is not a field-keyed representation
    #[error("Malformed worklist representation: {0}")]
    Malformed(String),
}

/// Directory-level failure during a scan
///
/// Fatal for the invocation and surfaced to the caller; never retried.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The watched directory could not be opened or enumerated
    #[error("Worklist directory unavailable: {path}: {source}")]
    DirectoryUnavailable {
        /// Directory that failed to enumerate
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
