//! Shipped `WorklistDecoder` implementations

use std::str::Utf8Error;
use thiserror::Error;
use wlpurge_domain::WorklistDecoder;

/// Errors from the passthrough decoder
#[derive(Error, Debug)]
pub enum DecodeError {
    /// File bytes are not valid UTF-8
    #[error("worklist bytes are not valid UTF-8: {0}")]
    NotUtf8(#[from] Utf8Error),
}

/// Decoder for worklist files that are already stored as field-keyed text.
///
/// Deployments whose worklist files sit in the native binary format plug a
/// real decoder in behind the [`WorklistDecoder`] trait; this one simply
/// validates UTF-8 and hands the text through.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughDecoder;

impl PassthroughDecoder {
    /// Create a passthrough decoder
    pub fn new() -> Self {
        Self
    }
}

impl WorklistDecoder for PassthroughDecoder {
    type Error = DecodeError;

    fn decode(&self, bytes: &[u8]) -> Result<String, Self::Error> {
        Ok(std::str::from_utf8(bytes)?.to_string())
    }
}
