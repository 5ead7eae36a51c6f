use crate::{node::Schema, prelude::*};

pub(super) fn validate_references(schema: &Schema, errs: &mut ErrorTree) {
    for record in schema.records() {
        for field in &record.fields {
            if let Some(set) = field.kind.choice_set()
                && schema.choice_set(set).is_err()
            {
                err!(
                    errs,
                    "field '{}.{}' references unknown choice set '{set}'",
                    record.ident,
                    field.ident
                );
            }

            if let Some(target) = field.kind.relation_target()
                && schema.record(target).is_err()
            {
                err!(
                    errs,
                    "field '{}.{}' references unknown record '{target}'",
                    record.ident,
                    field.ident
                );
            }
        }
    }

    for set in schema.choice_sets() {
        let defaults = set.variants.iter().filter(|v| v.default).count();
        if defaults > 1 {
            err!(
                errs,
                "choice set '{}' declares {defaults} default variants",
                set.ident
            );
        }
    }
}
