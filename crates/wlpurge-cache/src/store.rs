//! Day-partitioned dedup cache over a JSON array file

use crate::error::CacheError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};
use wlpurge_domain::ProcessedPair;

/// Default file name prefix for daily cache files
pub const DEFAULT_CACHE_PREFIX: &str = "WorklistPurgeCache";

/// One persisted entry; field names are the on-disk cache format
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    #[serde(default)]
    study: String,
    #[serde(rename = "accessionNumber", default)]
    accession_number: String,
}

impl CacheEntry {
    fn from_pair(pair: &ProcessedPair) -> Self {
        Self {
            study: pair.study_uid.clone(),
            accession_number: pair.accession_number.clone(),
        }
    }

    fn to_pair(&self) -> ProcessedPair {
        ProcessedPair::new(self.study.clone(), self.accession_number.clone())
    }
}

/// In-memory arena for one calendar day's entries
#[derive(Debug)]
struct DayState {
    date: NaiveDate,
    entries: Vec<CacheEntry>,
}

/// Persistent, date-partitioned store of already-processed identifier pairs.
///
/// One JSON array file per local calendar day, named
/// `<prefix>_<YYYY-MM-DD>.json`. The day's entries are held in a
/// mutex-guarded arena loaded lazily on first access of the day and
/// serialized back in full on every mutation, so the membership check and
/// the append of [`check_and_mark`] are a single atomic operation within
/// this process.
///
/// Entries are append-only within a day and never deduplicated against each
/// other. When the local date rolls over, the arena is reloaded from the
/// new day's file on the next call.
///
/// # Examples
///
/// ```no_run
/// use wlpurge_cache::DedupCache;
/// use wlpurge_domain::ProcessedPair;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cache = DedupCache::new("/var/cache/wlpurge", None);
/// let pair = ProcessedPair::new("1.2.3", "ACC1");
///
/// assert!(!cache.check_and_mark(&pair)?); // first sight: recorded
/// assert!(cache.check_and_mark(&pair)?);  // second sight: already processed
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DedupCache {
    dir: PathBuf,
    prefix: String,
    state: Mutex<Option<DayState>>,
}

impl DedupCache {
    /// Create a cache rooted in `dir`, with an optional file name prefix
    /// (defaults to [`DEFAULT_CACHE_PREFIX`])
    pub fn new(dir: impl Into<PathBuf>, prefix: Option<&str>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.unwrap_or(DEFAULT_CACHE_PREFIX).to_string(),
            state: Mutex::new(None),
        }
    }

    /// Path of the cache file for a given calendar date
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}_{}.json", self.prefix, date.format("%Y-%m-%d")))
    }

    /// Whether the pair is already covered by today's cache.
    ///
    /// Membership uses the same OR rule as the match engine: the pair is
    /// processed when any stored entry agrees on a non-empty study UID or
    /// on a non-empty accession number. A missing or corrupt cache file is
    /// treated as empty.
    pub fn is_processed(&self, pair: &ProcessedPair) -> bool {
        self.is_processed_at(today(), pair)
    }

    /// Atomically test membership and record the pair if absent.
    ///
    /// Returns `true` when the pair was already processed today (nothing is
    /// written), `false` when it was recorded now. The check and the append
    /// happen under one lock, closing the window in which two concurrent
    /// events for the same pair could both observe "not processed".
    pub fn check_and_mark(&self, pair: &ProcessedPair) -> Result<bool, CacheError> {
        self.check_and_mark_at(today(), pair)
    }

    fn is_processed_at(&self, date: NaiveDate, pair: &ProcessedPair) -> bool {
        let mut state = self.state.lock().unwrap();
        let day = self.day_state(&mut state, date);
        day.entries.iter().any(|e| e.to_pair().covers(pair))
    }

    fn check_and_mark_at(&self, date: NaiveDate, pair: &ProcessedPair) -> Result<bool, CacheError> {
        let mut state = self.state.lock().unwrap();
        let day = self.day_state(&mut state, date);

        if day.entries.iter().any(|e| e.to_pair().covers(pair)) {
            return Ok(true);
        }

        day.entries.push(CacheEntry::from_pair(pair));
        let path = self.path_for(date);
        write_entries(&path, &day.entries)?;
        Ok(false)
    }

    /// Get the day's arena, reloading when uninitialized or the date rolled
    /// over since the last call
    fn day_state<'a>(
        &self,
        state: &'a mut Option<DayState>,
        date: NaiveDate,
    ) -> &'a mut DayState {
        let stale = match state {
            Some(day) => day.date != date,
            None => true,
        };
        if stale {
            *state = Some(DayState {
                date,
                entries: load_entries(&self.path_for(date)),
            });
        }
        state.as_mut().unwrap()
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Load a day's entries; missing or corrupt files yield an empty day.
///
/// A corrupt cache never blocks processing, it only risks a reprocess.
fn load_entries(path: &Path) -> Vec<CacheEntry> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No cache file at {} yet, starting empty", path.display());
            return Vec::new();
        }
        Err(e) => {
            warn!(
                "Could not read cache file {}, treating as empty: {}",
                path.display(),
                e
            );
            return Vec::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(
                "Could not parse cache file {}, treating as empty: {}",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

fn write_entries(path: &Path, entries: &[CacheEntry]) -> Result<(), CacheError> {
    let body = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_path_naming() {
        let cache = DedupCache::new("/var/cache", None);
        let path = cache.path_for(date("2026-08-27"));
        assert_eq!(
            path,
            PathBuf::from("/var/cache/WorklistPurgeCache_2026-08-27.json")
        );

        let custom = DedupCache::new("/var/cache", Some("PurgeLog"));
        assert_eq!(
            custom.path_for(date("2026-08-27")),
            PathBuf::from("/var/cache/PurgeLog_2026-08-27.json")
        );
    }

    #[test]
    fn test_check_and_mark_first_then_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DedupCache::new(dir.path(), None);
        let day = date("2026-08-27");
        let pair = ProcessedPair::new("1.2.3", "ACC1");

        assert!(!cache.check_and_mark_at(day, &pair).unwrap());
        assert!(cache.check_and_mark_at(day, &pair).unwrap());

        // Only one entry was written.
        let contents = std::fs::read_to_string(cache.path_for(day)).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&contents).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["study"], "1.2.3");
        assert_eq!(entries[0]["accessionNumber"], "ACC1");
    }

    #[test]
    fn test_membership_uses_or_rule() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DedupCache::new(dir.path(), None);
        let day = date("2026-08-27");

        cache
            .check_and_mark_at(day, &ProcessedPair::new("1.2.3", "ACC1"))
            .unwrap();

        assert!(cache.is_processed_at(day, &ProcessedPair::new("1.2.3", "")));
        assert!(cache.is_processed_at(day, &ProcessedPair::new("", "ACC1")));
        assert!(!cache.is_processed_at(day, &ProcessedPair::new("9.9.9", "OTHER")));
    }

    #[test]
    fn test_empty_pair_never_member() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DedupCache::new(dir.path(), None);
        let day = date("2026-08-27");

        cache
            .check_and_mark_at(day, &ProcessedPair::new("1.2.3", ""))
            .unwrap();

        assert!(!cache.is_processed_at(day, &ProcessedPair::new("", "")));
    }

    #[test]
    fn test_corrupt_file_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DedupCache::new(dir.path(), None);
        let day = date("2026-08-27");
        std::fs::write(cache.path_for(day), "{{{ not json").unwrap();

        let pair = ProcessedPair::new("1.2.3", "");
        assert!(!cache.is_processed_at(day, &pair));

        // Processing proceeds: the pair is recorded over the corrupt file.
        assert!(!cache.check_and_mark_at(day, &pair).unwrap());
        assert!(cache.is_processed_at(day, &pair));
    }

    #[test]
    fn test_date_rollover_starts_fresh_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DedupCache::new(dir.path(), None);
        let pair = ProcessedPair::new("1.2.3", "ACC1");

        let monday = date("2026-08-24");
        let tuesday = date("2026-08-25");

        assert!(!cache.check_and_mark_at(monday, &pair).unwrap());
        // Next day: same pair is unseen again and lands in a new file.
        assert!(!cache.check_and_mark_at(tuesday, &pair).unwrap());

        assert!(cache.path_for(monday).exists());
        assert!(cache.path_for(tuesday).exists());
    }

    #[test]
    fn test_entries_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let day = date("2026-08-27");
        let pair = ProcessedPair::new("1.2.3", "ACC1");

        {
            let cache = DedupCache::new(dir.path(), None);
            cache.check_and_mark_at(day, &pair).unwrap();
        }

        // A fresh instance reads the same file.
        let cache = DedupCache::new(dir.path(), None);
        assert!(cache.is_processed_at(day, &pair));
    }

    #[test]
    fn test_reads_entries_written_by_other_producers() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DedupCache::new(dir.path(), None);
        let day = date("2026-08-27");

        std::fs::write(
            cache.path_for(day),
            r#"[{"study": "1.2.3", "accessionNumber": ""}]"#,
        )
        .unwrap();

        assert!(cache.is_processed_at(day, &ProcessedPair::new("1.2.3", "")));
    }
}
