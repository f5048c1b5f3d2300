//! Read one candidate worklist file and extract its identifiers

use crate::error::ReadError;
use std::path::Path;
use tracing::info;
use wlpurge_domain::{WorklistCandidate, WorklistDecoder};
use wlpurge_extract::{ExtractError, RecordFields, ACCESSION_NUMBER_TAG, STUDY_UID_TAG};

/// Read a worklist file and extract its study UID and accession number.
///
/// Returns `Ok(None)` when the file decodes cleanly but carries neither
/// identifier ("no identifiers" is a skip, not a hard error). I/O and
/// decode failures are mapped to [`ReadError`] for the caller to absorb.
pub fn read_candidate<D: WorklistDecoder>(
    path: &Path,
    decoder: &D,
) -> Result<Option<WorklistCandidate>, ReadError> {
    let bytes = std::fs::read(path)?;

    let text = decoder
        .decode(&bytes)
        .map_err(|e| ReadError::Decode(e.to_string()))?;

    let fields = RecordFields::parse(&text).map_err(|e| match e {
        ExtractError::InvalidFormat(msg) => ReadError::Malformed(msg),
        other => ReadError::Malformed(other.to_string()),
    })?;

    let study_uid = fields.get_or_empty(STUDY_UID_TAG);
    let accession_number = fields.get_or_empty(ACCESSION_NUMBER_TAG);

    let candidate = WorklistCandidate::new(path, study_uid, accession_number);
    if !candidate.has_identifiers() {
        info!(
            "Study UID and accession number are both empty in worklist file {}, skipping",
            path.display()
        );
        return Ok(None);
    }

    Ok(Some(candidate))
}
