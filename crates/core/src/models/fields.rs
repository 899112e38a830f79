//! Required-field extraction for raw input rows.

use crate::error::{AnalyticsError, RecordKind, Result};

pub(crate) fn required<T>(
    value: Option<T>,
    kind: RecordKind,
    id: Option<&str>,
    field: &'static str,
) -> Result<T> {
    value.ok_or_else(|| AnalyticsError::missing(kind, id, field))
}

/// Blank strings count as missing.
pub(crate) fn required_text(
    value: Option<String>,
    kind: RecordKind,
    id: Option<&str>,
    field: &'static str,
) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AnalyticsError::missing(kind, id, field)),
    }
}

pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
