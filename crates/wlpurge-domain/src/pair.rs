//! Processed pair module - one entry in the daily dedup cache

use crate::matching::identifiers_match;
use crate::record::IncomingRecord;

/// An identifier pair that has already been reconciled today.
///
/// Entries are append-only within a day; the cache never removes or
/// deduplicates them against each other, so equal pairs may accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedPair {
    /// Study instance UID of the processed record, or empty
    pub study_uid: String,

    /// Accession number of the processed record, or empty
    pub accession_number: String,
}

impl ProcessedPair {
    /// Create a pair from its two identifiers
    pub fn new(study_uid: impl Into<String>, accession_number: impl Into<String>) -> Self {
        Self {
            study_uid: study_uid.into(),
            accession_number: accession_number.into(),
        }
    }

    /// Whether this stored pair covers the given incoming pair.
    ///
    /// Same OR rule as the match engine: either identifier agrees exactly
    /// and is non-empty on the incoming side.
    pub fn covers(&self, incoming: &ProcessedPair) -> bool {
        identifiers_match(
            &incoming.study_uid,
            &incoming.accession_number,
            &self.study_uid,
            &self.accession_number,
        )
    }
}

impl From<&IncomingRecord> for ProcessedPair {
    fn from(record: &IncomingRecord) -> Self {
        Self {
            study_uid: record.study_uid.clone(),
            accession_number: record.accession_number.clone(),
        }
    }
}
