use crate::prelude::*;
use std::collections::BTreeMap;

///
/// Schema
///
/// Registry of record types and choice sets, keyed by ident.
/// Populated through [`crate::build::schema_write`] during startup and
/// read-only for the rest of the process lifetime.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Schema {
    records: BTreeMap<&'static str, Record>,
    choice_sets: BTreeMap<&'static str, ChoiceSet>,
}

impl Schema {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            choice_sets: BTreeMap::new(),
        }
    }

    /// Insert a record descriptor, replacing any previous declaration
    /// under the same ident. Re-registering identical statics is a no-op,
    /// which keeps startup registration idempotent across test binaries.
    pub fn insert_record(&mut self, record: Record) {
        self.records.insert(record.ident, record);
    }

    pub fn insert_choice_set(&mut self, set: ChoiceSet) {
        self.choice_sets.insert(set.ident, set);
    }

    pub fn record(&self, ident: &str) -> Result<&Record, SchemaError> {
        self.records
            .get(ident)
            .ok_or_else(|| SchemaError::UnknownRecordType(ident.to_string()))
    }

    pub fn choice_set(&self, ident: &str) -> Result<&ChoiceSet, SchemaError> {
        self.choice_sets
            .get(ident)
            .ok_or_else(|| SchemaError::UnknownChoiceSet(ident.to_string()))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn choice_sets(&self) -> impl Iterator<Item = &ChoiceSet> {
        self.choice_sets.values()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.choice_sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIVE_STATUS: ChoiceSet = ChoiceSet {
        ident: "active_status",
        variants: &[
            ChoiceVariant::default_value("active"),
            ChoiceVariant::new("inactive"),
        ],
    };

    const BRAND: Record = Record {
        ident: "Brand",
        fields: FieldList {
            fields: &[Field::required("brand_name", Primitive::Text)],
        },
    };

    fn sample() -> Schema {
        let mut schema = Schema::new();
        schema.insert_choice_set(ACTIVE_STATUS);
        schema.insert_record(BRAND);

        schema
    }

    #[test]
    fn lookups_resolve_registered_idents() {
        let schema = sample();

        assert!(schema.record("Brand").is_ok());
        assert!(schema.choice_set("active_status").is_ok());
    }

    #[test]
    fn unknown_record_type_is_a_structured_error() {
        let schema = sample();

        let err = schema.record("Vehicle").expect_err("not registered");
        assert!(matches!(err, SchemaError::UnknownRecordType(ref t) if t == "Vehicle"));
    }

    #[test]
    fn reinsert_replaces_rather_than_duplicates() {
        let mut schema = sample();
        schema.insert_record(BRAND);

        assert_eq!(schema.records().count(), 1);
    }
}
