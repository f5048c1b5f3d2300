//! Error types for the dedup cache

use thiserror::Error;

/// Errors that can occur while persisting the daily cache
///
/// Read-side failures (missing file, corrupt content) are not errors: the
/// cache treats them as an empty day and favors reprocessing over blocking.
/// Only write-side failures surface here.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache file could not be written
    #[error("Failed to write cache file: {0}")]
    Io(#[from] std::io::Error),

    /// Cache entries could not be serialized
    #[error("Failed to serialize cache entries: {0}")]
    Serialize(#[from] serde_json::Error),
}
