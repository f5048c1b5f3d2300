//! Metrics collection for purge operations

/// Counters collected while processing arrival events
///
/// Tracks how each event resolved and how often deletion misbehaved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeMetrics {
    /// Total arrival events received
    pub events: usize,

    /// Events skipped because the gate was disabled
    pub disabled_skips: usize,

    /// Events skipped because both identifiers were empty
    pub missing_identifier_skips: usize,

    /// Events skipped because the pair was already in today's cache
    pub duplicate_skips: usize,

    /// Events that scanned the directory without finding a match
    pub no_match: usize,

    /// Worklist files purged
    pub purged: usize,

    /// Deletions that failed (including already-gone files)
    pub delete_failures: usize,
}

impl PurgeMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an arrival event
    pub fn record_event(&mut self) {
        self.events += 1;
    }

    /// Record a skip due to the disabled gate
    pub fn record_disabled_skip(&mut self) {
        self.disabled_skips += 1;
    }

    /// Record a skip due to missing identifiers
    pub fn record_missing_identifiers(&mut self) {
        self.missing_identifier_skips += 1;
    }

    /// Record a skip due to a cache hit
    pub fn record_duplicate(&mut self) {
        self.duplicate_skips += 1;
    }

    /// Record a scan that found no match
    pub fn record_no_match(&mut self) {
        self.no_match += 1;
    }

    /// Record a purged worklist file
    pub fn record_purge(&mut self) {
        self.purged += 1;
    }

    /// Record a failed deletion
    pub fn record_delete_failure(&mut self) {
        self.delete_failures += 1;
    }

    /// Reset all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of the counters
    pub fn summary(&self) -> String {
        [
            "Purge Metrics Summary".to_string(),
            "=====================".to_string(),
            format!("Events received: {}", self.events),
            format!("Disabled skips: {}", self.disabled_skips),
            format!("Missing-identifier skips: {}", self.missing_identifier_skips),
            format!("Duplicate skips: {}", self.duplicate_skips),
            format!("No match: {}", self.no_match),
            format!("Purged: {}", self.purged),
            format!("Delete failures: {}", self.delete_failures),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = PurgeMetrics::new();
        assert_eq!(metrics.events, 0);
        assert_eq!(metrics.purged, 0);
    }

    #[test]
    fn test_record_counters() {
        let mut metrics = PurgeMetrics::new();
        metrics.record_event();
        metrics.record_event();
        metrics.record_purge();
        metrics.record_no_match();

        assert_eq!(metrics.events, 2);
        assert_eq!(metrics.purged, 1);
        assert_eq!(metrics.no_match, 1);
    }

    #[test]
    fn test_reset() {
        let mut metrics = PurgeMetrics::new();
        metrics.record_event();
        metrics.record_purge();

        metrics.reset();
        assert_eq!(metrics, PurgeMetrics::new());
    }

    #[test]
    fn test_summary() {
        let mut metrics = PurgeMetrics::new();
        metrics.record_event();
        metrics.record_purge();

        let summary = metrics.summary();
        assert!(summary.contains("Events received: 1"));
        assert!(summary.contains("Purged: 1"));
    }
}
