//! Error types for the purge orchestrator

use thiserror::Error;
use wlpurge_worklist::ScanError;

/// Errors that abort one arrival event
///
/// Per-candidate, per-extraction and cache conditions are absorbed inside
/// the event pipeline; only directory-level failures surface here.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The watched directory could not be scanned
    #[error(transparent)]
    Scan(#[from] ScanError),
}
