//! Module: validate::request
//! Responsibility: screening inbound payload keys against declared fields.
//! Does not own: type or format validation of field values.

use crate::error::ConfigError;
use serde::Serialize;
use serde_json::{Map, Value};
use shelf_schema::build::get_schema;

/// Payload keys that do not name a declared field of the record type.
///
/// An empty result means the payload is fully valid; an empty payload is
/// trivially valid. Fails with `UnknownRecordType` when the record type
/// was never declared, which is a configuration error rather than a
/// client input error.
pub fn invalid_request_fields(
    record_type: &str,
    payload: &Map<String, Value>,
) -> Result<Vec<String>, ConfigError> {
    let schema = get_schema()?;
    let record = schema.record(record_type)?;

    let invalid: Vec<String> = payload
        .keys()
        .filter(|key| !record.fields.contains(key.as_str()))
        .cloned()
        .collect();

    if !invalid.is_empty() {
        tracing::warn!(
            record = record_type,
            ?invalid,
            "invalid field names in request data"
        );
    }

    Ok(invalid)
}

///
/// RequiredFieldsReport
///
/// Missing and empty are reported separately so error messages can
/// distinguish "not sent" from "sent blank".
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct RequiredFieldsReport {
    /// Required fields absent from the payload.
    pub missing: Vec<String>,

    /// Required fields present but null or empty-string valued.
    pub empty: Vec<String>,
}

impl RequiredFieldsReport {
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty() && self.empty.is_empty()
    }
}

/// Check that every required field of the record type is present and
/// non-empty in the payload. `extended_required` adds caller-supplied
/// names to the required set before the check.
pub fn missing_required_fields(
    record_type: &str,
    payload: &Map<String, Value>,
    extended_required: Option<&[&str]>,
) -> Result<RequiredFieldsReport, ConfigError> {
    let schema = get_schema()?;
    let record = schema.record(record_type)?;

    let mut required: Vec<String> = record
        .required_field_idents()
        .iter()
        .map(ToString::to_string)
        .collect();

    if let Some(extra) = extended_required {
        required.extend(extra.iter().map(ToString::to_string));
    }

    let mut report = RequiredFieldsReport::default();
    for field in required {
        match payload.get(&field) {
            None => report.missing.push(field),
            Some(value) if is_empty_value(value) => report.empty.push(field),
            Some(_) => {}
        }
    }

    Ok(report)
}

// Null and "" both count as empty; 0 and false are real values.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
