//! wlpurge Domain Layer
//!
//! Core types and matching rules for worklist reconciliation. This crate has
//! zero external dependencies and defines the fundamental concepts that all
//! other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **IncomingRecord**: the identifier pair carried by a freshly stored
//!   image record (study UID + accession number, either may be empty)
//! - **WorklistCandidate**: one pending worklist file with its extracted
//!   identifiers, alive only for the duration of a directory scan
//! - **ProcessedPair**: one entry in the day-partitioned dedup cache
//! - **Matching rule**: a candidate matches when either identifier agrees
//!   exactly and the incoming side of that identifier is non-empty
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure business logic only
//! - The decode of worklist file bytes into a field-keyed textual
//!   representation is an external collaborator, abstracted behind the
//!   `WorklistDecoder` trait in `traits`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod candidate;
pub mod matching;
pub mod pair;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use candidate::WorklistCandidate;
pub use matching::identifiers_match;
pub use pair::ProcessedPair;
pub use record::IncomingRecord;
pub use traits::WorklistDecoder;
