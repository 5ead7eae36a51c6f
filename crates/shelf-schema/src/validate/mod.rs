mod naming;
mod relation;

use crate::{node::Schema, prelude::*};

/// Validate a whole schema, collecting every issue before failing.
pub fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    naming::validate_naming(schema, &mut errs);
    relation::validate_references(schema, &mut errs);

    errs.result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ChoiceSet, ChoiceVariant, Field, FieldList, Record};
    use crate::types::Primitive;

    const ACTIVE_STATUS: ChoiceSet = ChoiceSet {
        ident: "active_status",
        variants: &[
            ChoiceVariant::default_value("active"),
            ChoiceVariant::new("inactive"),
        ],
    };

    const WELL_FORMED_BRAND: Record = Record {
        ident: "Brand",
        fields: FieldList {
            fields: &[
                Field::required("brand_name", Primitive::Text),
                Field::choice("active_status", "active_status"),
            ],
        },
    };

    const DUPLICATE_FIELD_BRAND: Record = Record {
        ident: "Brand",
        fields: FieldList {
            fields: &[
                Field::required("brand_name", Primitive::Text),
                Field::scalar("brand_name", Primitive::Text),
            ],
        },
    };

    const DANGLING_CHOICE_BRAND: Record = Record {
        ident: "Brand",
        fields: FieldList {
            fields: &[Field::choice("status", "missing_set")],
        },
    };

    const EMPTY_RECORD: Record = Record {
        ident: "",
        fields: FieldList { fields: &[] },
    };

    const DANGLING_RELATION_UNIT: Record = Record {
        ident: "Unit",
        fields: FieldList {
            fields: &[Field::relation("product", "Missing")],
        },
    };

    fn base_schema() -> Schema {
        let mut schema = Schema::new();
        schema.insert_choice_set(ACTIVE_STATUS);

        schema
    }

    #[test]
    fn well_formed_schema_passes() {
        let mut schema = base_schema();
        schema.insert_record(WELL_FORMED_BRAND);

        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn duplicate_field_idents_are_reported() {
        let mut schema = base_schema();
        schema.insert_record(DUPLICATE_FIELD_BRAND);

        let errs = validate_schema(&schema).expect_err("duplicate field must fail");
        assert!(errs.to_string().contains("duplicate field 'brand_name'"));
    }

    #[test]
    fn dangling_choice_reference_is_reported() {
        let mut schema = base_schema();
        schema.insert_record(DANGLING_CHOICE_BRAND);

        let errs = validate_schema(&schema).expect_err("dangling reference must fail");
        assert!(errs.to_string().contains("missing_set"));
    }

    #[test]
    fn issues_accumulate_across_records() {
        let mut schema = base_schema();
        schema.insert_record(EMPTY_RECORD);
        schema.insert_record(DANGLING_RELATION_UNIT);

        let errs = validate_schema(&schema).expect_err("multiple issues expected");
        assert!(errs.len() >= 3, "expected several issues, got: {errs}");
    }
}
