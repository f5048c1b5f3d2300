//! Trait interfaces for external collaborators
//!
//! Infrastructure implementations live in other crates; the domain only
//! defines the seams.

/// Decoder from worklist file bytes to a field-keyed textual representation.
///
/// Worklist files are stored in an external binary format; turning one into
/// text keyed by tag name is an opaque collaborator step, not this system's
/// logic. Implementations must be cheap to call once per candidate during a
/// directory scan.
pub trait WorklistDecoder {
    /// Error type returned by the decoder
    type Error: std::fmt::Display;

    /// Decode raw file bytes into field-keyed text
    ///
    /// The returned text maps tag names to string values (a flat JSON
    /// object in the shipped implementation). Decode failures are
    /// per-candidate conditions; callers skip the file and continue.
    fn decode(&self, bytes: &[u8]) -> Result<String, Self::Error>;
}
