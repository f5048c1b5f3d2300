//! Core purge orchestrator: one arrival event from gate check to purge

use crate::{EngineError, PurgeConfig, PurgeGate, PurgeMetrics};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{error, info, warn};
use wlpurge_cache::DedupCache;
use wlpurge_domain::{IncomingRecord, ProcessedPair, WorklistDecoder};
use wlpurge_extract::{RecordFields, ACCESSION_NUMBER_FIELD, STUDY_UID_FIELD};
use wlpurge_worklist::find_match;

/// How one arrival event resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeOutcome {
    /// The gate was off; nothing was extracted, checked or scanned
    Disabled,
    /// Both identifier fields were empty; no cache check, no scan
    MissingIdentifiers,
    /// The pair was already in today's cache; no scan
    AlreadyProcessed,
    /// The directory was scanned without finding a match
    NoMatch,
    /// A matching worklist file was purged
    Purged {
        /// Path of the deleted file
        path: PathBuf,
    },
}

impl PurgeOutcome {
    /// Short label for logs and boundary responses
    pub fn label(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::MissingIdentifiers => "missing-identifiers",
            Self::AlreadyProcessed => "already-processed",
            Self::NoMatch => "no-match",
            Self::Purged { .. } => "purged",
        }
    }
}

/// Orchestrator for worklist reconciliation.
///
/// Invoked synchronously by the boundary once per stored record. Each event
/// walks the pipeline gate check → identifier extraction → dedup check →
/// directory scan → delete → cache record, short-circuiting at the first
/// stage that resolves it.
///
/// The engine spawns no tasks of its own; concurrent invocation is the
/// caller's choice. The dedup cache serializes its check-and-append
/// internally, but the scan-then-delete step is not atomic: a file found by
/// one event may already be gone by the time it is deleted, which is
/// tolerated as a non-fatal outcome. The net guarantee is at-least-once
/// processing with best-effort dedup.
pub struct PurgeEngine<D: WorklistDecoder> {
    config: PurgeConfig,
    gate: PurgeGate,
    cache: DedupCache,
    decoder: D,
    metrics: Mutex<PurgeMetrics>,
}

impl<D: WorklistDecoder> PurgeEngine<D> {
    /// Create an engine from its configuration, gate and file decoder
    pub fn new(config: PurgeConfig, gate: PurgeGate, decoder: D) -> Self {
        let cache = DedupCache::new(&config.cache_dir, config.cache_prefix.as_deref());
        Self {
            config,
            gate,
            cache,
            decoder,
            metrics: Mutex::new(PurgeMetrics::new()),
        }
    }

    /// The shared enable/disable gate
    pub fn gate(&self) -> &PurgeGate {
        &self.gate
    }

    /// Snapshot of the current metrics
    pub fn metrics(&self) -> PurgeMetrics {
        self.metrics.lock().unwrap().clone()
    }

    /// Process one stored-record event.
    ///
    /// `record_text` is the record's field-keyed textual representation;
    /// `record_id` identifies the record for logging only. Only a failure
    /// to enumerate the watched directory aborts the event; every other
    /// condition degrades to a short-circuit outcome.
    pub fn on_record_stored(
        &self,
        record_text: &str,
        record_id: &str,
    ) -> Result<PurgeOutcome, EngineError> {
        self.metrics.lock().unwrap().record_event();
        info!(
            "Received record {} ({} bytes of field data)",
            record_id,
            record_text.len()
        );

        if !self.gate.is_enabled() {
            info!("Worklist purger disabled, skipping record {}", record_id);
            self.metrics.lock().unwrap().record_disabled_skip();
            return Ok(PurgeOutcome::Disabled);
        }

        let incoming = self.extract_identifiers(record_text, record_id);
        info!("Record {}: {}", record_id, incoming);

        if !incoming.has_identifiers() {
            warn!(
                "Both study UID and accession number are empty in record {}, skipping",
                record_id
            );
            self.metrics.lock().unwrap().record_missing_identifiers();
            return Ok(PurgeOutcome::MissingIdentifiers);
        }

        let pair = ProcessedPair::from(&incoming);
        if self.cache.is_processed(&pair) {
            info!("Worklist purging already done for record {}", record_id);
            self.metrics.lock().unwrap().record_duplicate();
            return Ok(PurgeOutcome::AlreadyProcessed);
        }

        let found = find_match(
            &self.config.worklist_dir,
            &self.config.worklist_extension,
            &incoming,
            &self.decoder,
        )
        .inspect_err(|e| error!("Scan failed for record {}: {}", record_id, e))?;

        let candidate = match found {
            Some(candidate) => candidate,
            None => {
                info!("No matching worklist file for record {}", record_id);
                self.metrics.lock().unwrap().record_no_match();
                return Ok(PurgeOutcome::NoMatch);
            }
        };

        info!("Removing worklist file {}", candidate.path.display());
        if let Err(e) = std::fs::remove_file(&candidate.path) {
            // A concurrent event may have deleted the file between the scan
            // and this call; either way the event continues to the cache.
            if e.kind() == std::io::ErrorKind::NotFound {
                info!("Worklist file {} already gone", candidate.path.display());
            } else {
                warn!(
                    "Could not delete worklist file {}: {}",
                    candidate.path.display(),
                    e
                );
            }
            self.metrics.lock().unwrap().record_delete_failure();
        }

        match self.cache.check_and_mark(&pair) {
            Ok(true) => info!("Pair for record {} was recorded concurrently", record_id),
            Ok(false) => {}
            Err(e) => error!(
                "Could not record processed pair for record {}: {}",
                record_id, e
            ),
        }

        self.metrics.lock().unwrap().record_purge();
        Ok(PurgeOutcome::Purged {
            path: candidate.path,
        })
    }

    /// Extract the identifier pair, degrading every failure to empty fields
    fn extract_identifiers(&self, record_text: &str, record_id: &str) -> IncomingRecord {
        match RecordFields::parse(record_text) {
            Ok(fields) => IncomingRecord::new(
                fields.get_or_empty(STUDY_UID_FIELD),
                fields.get_or_empty(ACCESSION_NUMBER_FIELD),
            ),
            Err(e) => {
                warn!("Could not parse record {}: {}", record_id, e);
                IncomingRecord::default()
            }
        }
    }
}
