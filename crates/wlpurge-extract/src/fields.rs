//! Parse a record's textual representation and look up identifier fields

use crate::error::ExtractError;
use serde_json::Value;
use tracing::warn;

/// Field name carrying the study instance UID in an incoming record
pub const STUDY_UID_FIELD: &str = "StudyInstanceUID";

/// Field name carrying the accession number in an incoming record
pub const ACCESSION_NUMBER_FIELD: &str = "AccessionNumber";

/// Tag key carrying the study instance UID in a decoded worklist file
pub const STUDY_UID_TAG: &str = "0020,000d";

/// Tag key carrying the accession number in a decoded worklist file
pub const ACCESSION_NUMBER_TAG: &str = "0008,0050";

/// Maximum accepted field name length in bytes
pub const MAX_FIELD_NAME_LEN: usize = 100;

/// Maximum accepted value length in bytes (the UID length ceiling of the
/// underlying record format)
pub const MAX_VALUE_LEN: usize = 64;

/// A record's field-keyed representation, decoded once and queried many times.
///
/// The representation is a flat JSON object mapping field names to string
/// values. Lookups go through the decoded map, never through the raw text,
/// so only a top-level field can supply a value.
#[derive(Debug, Clone)]
pub struct RecordFields {
    fields: serde_json::Map<String, Value>,
}

impl RecordFields {
    /// Parse record text into its field map
    ///
    /// Fails with [`ExtractError::InvalidFormat`] when the text is not a
    /// JSON object; callers treat that the same as every field being absent.
    pub fn parse(record: &str) -> Result<Self, ExtractError> {
        let json: Value = serde_json::from_str(record)
            .map_err(|e| ExtractError::InvalidFormat(format!("JSON parse error: {}", e)))?;

        match json {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ExtractError::InvalidFormat(format!(
                "expected JSON object, got {}",
                type_name(&other)
            ))),
        }
    }

    /// Look up a field's string value, applying the length bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use wlpurge_extract::RecordFields;
    ///
    /// let fields = RecordFields::parse(r#"{"AccessionNumber": "ACC123"}"#).unwrap();
    /// assert_eq!(fields.get("AccessionNumber").unwrap(), "ACC123");
    /// assert!(fields.get("StudyInstanceUID").is_err());
    /// ```
    pub fn get(&self, field: &str) -> Result<String, ExtractError> {
        if field.len() >= MAX_FIELD_NAME_LEN {
            return Err(ExtractError::ValueTooLong(field.len(), MAX_FIELD_NAME_LEN));
        }

        let value = self
            .fields
            .get(field)
            .and_then(|v| v.as_str())
            .ok_or_else(|| ExtractError::FieldNotFound(field.to_string()))?;

        if value.len() > MAX_VALUE_LEN {
            return Err(ExtractError::TagTooLong {
                field: field.to_string(),
                len: value.len(),
                max: MAX_VALUE_LEN,
            });
        }

        Ok(value.to_string())
    }

    /// Look up a field, degrading every failure to an empty string
    ///
    /// This is the shape callers on the reconciliation path want: a missing,
    /// oversized, or malformed field is the same as an absent identifier.
    /// Failures other than plain absence are logged.
    pub fn get_or_empty(&self, field: &str) -> String {
        match self.get(field) {
            Ok(value) => value,
            Err(ExtractError::FieldNotFound(_)) => String::new(),
            Err(e) => {
                warn!("Treating field '{}' as absent: {}", field, e);
                String::new()
            }
        }
    }
}

/// One-shot extraction: parse the record text and look up a single field
pub fn extract(record: &str, field: &str) -> Result<String, ExtractError> {
    RecordFields::parse(record)?.get(field)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
