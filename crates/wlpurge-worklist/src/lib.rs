//! wlpurge Worklist Layer
//!
//! Reads candidate worklist files and scans the watched directory for the
//! first one matching an incoming record.
//!
//! # Architecture
//!
//! ```text
//! watched dir → find_match → read_candidate → WorklistDecoder → RecordFields
//! ```
//!
//! - Per-candidate failures (unreadable file, decode error, no identifiers)
//!   are absorbed here: logged, skipped, scan continues
//! - Only the directory itself failing to enumerate propagates, as
//!   [`ScanError::DirectoryUnavailable`]
//! - Enumeration order is unspecified and first match wins; see
//!   [`scan::find_match`]
//!
//! # Example Usage
//!
//! ```no_run
//! use wlpurge_domain::IncomingRecord;
//! use wlpurge_worklist::{find_match, PassthroughDecoder};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let incoming = IncomingRecord::new("1.2.3", "ACC1");
//! let decoder = PassthroughDecoder::new();
//!
//! if let Some(candidate) = find_match(Path::new("/var/worklists"), "wl", &incoming, &decoder)? {
//!     println!("would purge {}", candidate.path.display());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod decode;
mod error;
mod reader;
mod scan;

pub use decode::{DecodeError, PassthroughDecoder};
pub use error::{ReadError, ScanError};
pub use reader::read_candidate;
pub use scan::find_match;
