//! wlpurge Engine
//!
//! Purge orchestrator: reconciles each stored-record event against the
//! watched worklist directory.
//!
//! # Overview
//!
//! One arrival event walks this pipeline, short-circuiting at the first
//! stage that resolves it:
//!
//! ```text
//! gate check → extract identifiers → dedup check → scan → delete → record pair
//! ```
//!
//! - The gate is a shared atomic toggle flipped by the administrative
//!   boundary; disabled means the event ends before extraction
//! - Extraction failures degrade to empty identifiers; both empty ends the
//!   event without touching cache or directory
//! - Only a failure to enumerate the watched directory aborts an event;
//!   unreadable candidates, failed deletions and cache write errors are
//!   logged and absorbed
//! - Guarantee: at-least-once processing with best-effort daily dedup
//!
//! # Example Usage
//!
//! ```no_run
//! use wlpurge_engine::{PurgeConfig, PurgeEngine, PurgeGate};
//! use wlpurge_worklist::PassthroughDecoder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PurgeConfig::new("/var/worklists");
//! let gate = PurgeGate::new(true);
//! let engine = PurgeEngine::new(config, gate, PassthroughDecoder::new());
//!
//! let record = r#"{"StudyInstanceUID": "1.2.3", "AccessionNumber": "ACC1"}"#;
//! let outcome = engine.on_record_stored(record, "rec-001")?;
//! println!("outcome: {}", outcome.label());
//! println!("{}", engine.metrics().summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod gate;
mod metrics;

pub use config::PurgeConfig;
pub use engine::{PurgeEngine, PurgeOutcome};
pub use error::EngineError;
pub use gate::PurgeGate;
pub use metrics::PurgeMetrics;
