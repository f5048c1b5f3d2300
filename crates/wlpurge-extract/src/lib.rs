//! wlpurge Field Extractor
//!
//! Pulls identifier fields out of the flat textual representation of a
//! record.
//!
//! # Overview
//!
//! Incoming records and decoded worklist files both arrive as a flat JSON
//! object mapping field names to string values. This crate decodes that
//! object once per record and serves direct, bounded lookups: a structured
//! lookup by key, never a substring scan of the raw text, so a same-named
//! field nested in an unrelated structure cannot shadow the top-level
//! value. Field names and values are capped at fixed byte lengths.
//!
//! # Example Usage
//!
//! ```
//! use wlpurge_extract::{extract, RecordFields, STUDY_UID_FIELD};
//!
//! let record = r#"{"StudyInstanceUID": "1.2.3", "AccessionNumber": "ACC1"}"#;
//!
//! // One-shot
//! assert_eq!(extract(record, "AccessionNumber").unwrap(), "ACC1");
//!
//! // Decode once, look up twice
//! let fields = RecordFields::parse(record).unwrap();
//! assert_eq!(fields.get(STUDY_UID_FIELD).unwrap(), "1.2.3");
//! ```

#![warn(missing_docs)]

mod error;
mod fields;

pub use error::ExtractError;
pub use fields::{
    extract, RecordFields, ACCESSION_NUMBER_FIELD, ACCESSION_NUMBER_TAG, MAX_FIELD_NAME_LEN,
    MAX_VALUE_LEN, STUDY_UID_FIELD, STUDY_UID_TAG,
};
