//! Incoming record module - the identifier pair of a freshly stored image record

use crate::matching::identifiers_match;
use std::fmt;

/// Identifiers extracted from an incoming image record.
///
/// Both fields may be empty; an event with both empty carries nothing to
/// reconcile against and is skipped by the orchestrator. The record itself
/// (pixel data, full tag set) stays with the host; only the two matching
/// keys cross into this system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingRecord {
    /// Study instance UID, or empty when the record does not carry one
    pub study_uid: String,

    /// Accession number, or empty when the record does not carry one
    pub accession_number: String,
}

impl IncomingRecord {
    /// Create a record from its two identifiers
    pub fn new(study_uid: impl Into<String>, accession_number: impl Into<String>) -> Self {
        Self {
            study_uid: study_uid.into(),
            accession_number: accession_number.into(),
        }
    }

    /// Whether at least one identifier is present
    ///
    /// # Examples
    ///
    /// ```
    /// use wlpurge_domain::IncomingRecord;
    ///
    /// assert!(IncomingRecord::new("1.2.3", "").has_identifiers());
    /// assert!(!IncomingRecord::new("", "").has_identifiers());
    /// ```
    pub fn has_identifiers(&self) -> bool {
        !self.study_uid.is_empty() || !self.accession_number.is_empty()
    }

    /// Apply the matching rule against a candidate's identifiers
    pub fn matches(&self, candidate_study: &str, candidate_accession: &str) -> bool {
        identifiers_match(
            &self.study_uid,
            &self.accession_number,
            candidate_study,
            candidate_accession,
        )
    }
}

impl fmt::Display for IncomingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "study={} accession={}",
            if self.study_uid.is_empty() { "<empty>" } else { &self.study_uid },
            if self.accession_number.is_empty() { "<empty>" } else { &self.accession_number },
        )
    }
}
