//! Module: catalog
//! Responsibility: declared-field lookups against the registered schema.
//! Does not own: payload screening or query validation decisions.

use crate::error::ConfigError;
use shelf_schema::build::get_schema;

/// Declared field idents for a record type, in declaration order.
pub fn list_fields(record_type: &str) -> Result<Vec<&'static str>, ConfigError> {
    let schema = get_schema()?;
    let record = schema.record(record_type)?;

    Ok(record.field_idents())
}

/// Field idents a create payload for this record type must carry.
pub fn required_fields(record_type: &str) -> Result<Vec<&'static str>, ConfigError> {
    let schema = get_schema()?;
    let record = schema.record(record_type)?;

    Ok(record.required_field_idents())
}
