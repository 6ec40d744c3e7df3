//! Parsing and canonical formatting of the run configuration (conf) payload.
//!
//! The payload text is the only source of truth. Nothing here caches whether
//! it parses: every check re-reads the current text.

use serde_json::Value;
use thiserror::Error;

/// The conf text is not a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PayloadParseError {
    pub message: String,
    /// 1-based line of the failure, 0 when serde_json did not report one
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for PayloadParseError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Parse conf text into a JSON value.
pub fn parse_config(text: &str) -> Result<Value, PayloadParseError> {
    Ok(serde_json::from_str(text)?)
}

/// Canonical form: pretty-printed with two-space indentation, keys in input order.
///
/// Feeding the output back in returns it unchanged.
pub fn canonical_json(text: &str) -> Result<String, PayloadParseError> {
    let value = parse_config(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Validate conf text for submission.
///
/// Blank text means "no conf override" and yields `Ok(None)`.
pub fn validate_config(text: &str) -> Result<Option<Value>, PayloadParseError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_config(text).map(Some)
}

/// Text that should replace `text` after an edit, if any.
///
/// Returns `None` when validation is off, the text is empty, it does not
/// parse, or it is already canonical. Invalid input is never overwritten.
pub fn normalize_config(text: &str, validation_enabled: bool) -> Option<String> {
    if !validation_enabled || text.is_empty() {
        return None;
    }
    match canonical_json(text) {
        Ok(canonical) if canonical != text => Some(canonical),
        _ => None,
    }
}

/// Submit gate. With validation off the conf text never blocks a trigger.
pub fn is_trigger_allowed(text: &str, validation_enabled: bool) -> bool {
    !validation_enabled || validate_config(text).is_ok()
}
