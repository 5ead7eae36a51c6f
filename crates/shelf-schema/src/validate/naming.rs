use crate::{MAX_FIELD_NAME_LEN, MAX_RECORD_NAME_LEN, node::Schema, prelude::*};
use std::collections::BTreeSet;

pub(super) fn validate_naming(schema: &Schema, errs: &mut ErrorTree) {
    for record in schema.records() {
        validate_ident(record.ident, "record", MAX_RECORD_NAME_LEN, errs);

        if record.fields.fields.is_empty() {
            err!(errs, "record '{}' declares no fields", record.ident);
        }

        let mut seen = BTreeSet::new();
        for field in &record.fields {
            validate_ident(field.ident, "field", MAX_FIELD_NAME_LEN, errs);

            if !seen.insert(field.ident) {
                err!(
                    errs,
                    "duplicate field '{}' in record '{}'",
                    field.ident,
                    record.ident
                );
            }
        }
    }

    for set in schema.choice_sets() {
        validate_ident(set.ident, "choice set", MAX_FIELD_NAME_LEN, errs);

        if set.variants.is_empty() {
            err!(errs, "choice set '{}' declares no variants", set.ident);
        }

        let mut seen = BTreeSet::new();
        for variant in set.variants {
            if !seen.insert(variant.value) {
                err!(
                    errs,
                    "duplicate variant '{}' in choice set '{}'",
                    variant.value,
                    set.ident
                );
            }
        }
    }
}

fn validate_ident(ident: &str, kind: &str, max_len: usize, errs: &mut ErrorTree) {
    if ident.is_empty() {
        err!(errs, "{kind} ident cannot be empty");
    } else if ident.len() > max_len {
        err!(errs, "{kind} ident '{ident}' exceeds {max_len} characters");
    }

    if ident.contains(char::is_whitespace) {
        err!(errs, "{kind} ident '{ident}' contains whitespace");
    }
}
