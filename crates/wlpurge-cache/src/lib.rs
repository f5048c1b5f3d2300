//! wlpurge Dedup Cache
//!
//! Persistent, date-partitioned record of already-processed identifier
//! pairs, used to avoid reconciling the same record twice within a day.
//!
//! # Overview
//!
//! - One JSON array file per local calendar day
//!   (`<prefix>_<YYYY-MM-DD>.json`), created lazily on the first recorded
//!   pair of the day
//! - The whole day is held in a mutex-guarded in-memory arena;
//!   [`DedupCache::check_and_mark`] tests membership and appends under one
//!   lock, then rewrites the file
//! - Missing or corrupt cache files are logged and treated as empty: a bad
//!   cache risks reprocessing a record, it never blocks one
//! - Membership uses the same identifier OR rule as the match engine
//!
//! The file format is internal and may change across versions without
//! compatibility requirements.

#![warn(missing_docs)]

mod error;
mod store;

pub use error::CacheError;
pub use store::{DedupCache, DEFAULT_CACHE_PREFIX};
