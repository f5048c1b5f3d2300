//! Directory scan and first-match selection

use crate::error::ScanError;
use crate::reader::read_candidate;
use std::path::Path;
use tracing::{info, warn};
use wlpurge_domain::{IncomingRecord, WorklistCandidate, WorklistDecoder};

/// Scan the watched directory for the first worklist file matching the
/// incoming record.
///
/// Only regular files (symlinks resolved) whose extension equals
/// `extension` case-insensitively are considered. Candidates are visited in
/// the order the file system enumerates them, which is unspecified: when
/// several files would match, which one wins is not defined by this
/// contract. Per-candidate read failures and files without identifiers are
/// logged and skipped; the scan continues.
///
/// Returns `Ok(None)` when the listing is exhausted without a match.
/// Fails with [`ScanError::DirectoryUnavailable`] when the directory itself
/// cannot be enumerated.
pub fn find_match<D: WorklistDecoder>(
    dir: &Path,
    extension: &str,
    incoming: &IncomingRecord,
    decoder: &D,
) -> Result<Option<WorklistCandidate>, ScanError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ScanError::DirectoryUnavailable {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable directory entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();

        if !has_extension(&path, extension) {
            continue;
        }

        // std::fs::metadata follows symlinks, so a symlink to a regular
        // worklist file qualifies as a candidate.
        match std::fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                warn!("Skipping candidate {}: {}", path.display(), e);
                continue;
            }
        }

        info!("Considering worklist file {}", path.display());

        let candidate = match read_candidate(&path, decoder) {
            Ok(Some(candidate)) => candidate,
            Ok(None) => continue,
            Err(e) => {
                warn!("Skipping candidate {}: {}", path.display(), e);
                continue;
            }
        };

        if incoming.matches(&candidate.study_uid, &candidate.accession_number) {
            info!(
                "Found matching worklist {}: file has study={} accession={}, incoming {}",
                candidate.path.display(),
                candidate.study_uid,
                candidate.accession_number,
                incoming
            );
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}
