//! Shared enable/disable gate for the purge pipeline

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Thread-safe toggle gating all event processing.
///
/// Checked once at the start of every arrival event; flipped synchronously
/// by the administrative endpoints. Clones share the same flag, so the
/// boundary layer and the engine observe one state.
///
/// # Examples
///
/// ```
/// use wlpurge_engine::PurgeGate;
///
/// let gate = PurgeGate::new(true);
/// assert!(gate.is_enabled());
///
/// gate.disable();
/// assert!(!gate.is_enabled());
/// ```
#[derive(Debug, Clone)]
pub struct PurgeGate {
    enabled: Arc<AtomicBool>,
}

impl PurgeGate {
    /// Create a gate with the given initial state
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    /// Enable event processing
    pub fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
    }

    /// Disable event processing
    pub fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
    }

    /// Whether event processing is currently enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl Default for PurgeGate {
    fn default() -> Self {
        Self::new(false)
    }
}
