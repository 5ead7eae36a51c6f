//! Shared unit-test fixtures: a small catalog registered once per binary.

use shelf_schema::build::schema_write;
use shelf_schema::node::{ChoiceSet, ChoiceVariant, Field, FieldList, Record};
use shelf_schema::types::Primitive;
use std::sync::Once;

static INIT: Once = Once::new();

const ACTIVE_STATUS: ChoiceSet = ChoiceSet {
    ident: "active_status",
    variants: &[
        ChoiceVariant::default_value("active"),
        ChoiceVariant::new("inactive"),
    ],
};

const TEST_BRAND: Record = Record {
    ident: "TestBrand",
    fields: FieldList {
        fields: &[
            Field::required("brand_name", Primitive::Text),
            Field::scalar("origin_country", Primitive::Text),
            Field::scalar("web_url", Primitive::Url),
            Field::choice("active_status", "active_status"),
            Field::scalar("description", Primitive::Text),
            Field::scalar("created_at", Primitive::Timestamp),
            Field::scalar("updated_at", Primitive::Timestamp),
        ],
    },
};

const TEST_PRODUCT: Record = Record {
    ident: "TestProduct",
    fields: FieldList {
        fields: &[
            Field::required("product_name", Primitive::Text),
            Field::relation("brand", "TestBrand"),
            Field::choice("active_status", "active_status"),
        ],
    },
};

pub(crate) fn register() {
    INIT.call_once(|| {
        let mut schema = schema_write();

        schema.insert_choice_set(ACTIVE_STATUS);
        schema.insert_record(TEST_BRAND);
        schema.insert_record(TEST_PRODUCT);
    });
}
