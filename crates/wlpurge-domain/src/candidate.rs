//! Worklist candidate module - one scanned file and its identifiers

use std::path::PathBuf;

/// A worklist file read during a directory scan.
///
/// Exists only for the duration of one scan pass; never persisted. The
/// identifiers are whatever the file's decoded representation carried,
/// either of which may be empty (a file with both empty is skipped by the
/// reader and never becomes a candidate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorklistCandidate {
    /// Path of the file inside the watched directory
    pub path: PathBuf,

    /// Study instance UID from the file, or empty
    pub study_uid: String,

    /// Accession number from the file, or empty
    pub accession_number: String,
}

impl WorklistCandidate {
    /// Create a candidate from a path and its extracted identifiers
    pub fn new(
        path: impl Into<PathBuf>,
        study_uid: impl Into<String>,
        accession_number: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            study_uid: study_uid.into(),
            accession_number: accession_number.into(),
        }
    }

    /// Whether at least one identifier was found in the file
    pub fn has_identifiers(&self) -> bool {
        !self.study_uid.is_empty() || !self.accession_number.is_empty()
    }
}
