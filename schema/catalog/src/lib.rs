//! Product-catalog schema fixtures: the record types and choice sets a
//! catalog deployment registers at startup.
//!
//! Field lists mirror the catalog's tables; every table carries the
//! audit columns (`active_status`, `created_at`, `updated_at`) alongside
//! its own fields.

use shelf_schema::build::schema_write;
use shelf_schema::node::{ChoiceSet, ChoiceVariant, Field, FieldList, Record};
use shelf_schema::types::Primitive;
use std::sync::Once;

///
/// ACTIVE_STATUS
///

pub const ACTIVE_STATUS: ChoiceSet = ChoiceSet {
    ident: "active_status",
    variants: &[
        ChoiceVariant::default_value("active"),
        ChoiceVariant::new("inactive"),
    ],
};

///
/// BRAND
///

pub const BRAND: Record = Record {
    ident: "Brand",
    fields: FieldList {
        fields: &[
            Field::required("brand_name", Primitive::Text),
            Field::scalar("origin_country", Primitive::Text),
            Field::scalar("brand_logo", Primitive::Image),
            Field::scalar("web_url", Primitive::Url),
            Field::scalar("contact_number", Primitive::Phone),
            Field::scalar("brand_email", Primitive::Email),
            Field::choice("active_status", "active_status"),
            Field::scalar("description", Primitive::Text),
            Field::scalar("created_at", Primitive::Timestamp),
            Field::scalar("updated_at", Primitive::Timestamp),
        ],
    },
};

///
/// CATEGORY
///

pub const CATEGORY: Record = Record {
    ident: "Category",
    fields: FieldList {
        fields: &[
            Field::required("category_name", Primitive::Text),
            Field::scalar("parent_id", Primitive::Nat),
            Field::scalar("is_client_usable", Primitive::Bool),
            Field::scalar("category_icon", Primitive::Image),
            Field::choice("active_status", "active_status"),
            Field::scalar("description", Primitive::Text),
            Field::scalar("created_at", Primitive::Timestamp),
            Field::scalar("updated_at", Primitive::Timestamp),
        ],
    },
};

///
/// SUB_CATEGORY
///

pub const SUB_CATEGORY: Record = Record {
    ident: "SubCategory",
    fields: FieldList {
        fields: &[
            Field::required("sub_category_name", Primitive::Text),
            Field::relation("category", "Category"),
            Field::scalar("parent_id", Primitive::Nat),
            Field::scalar("sub_category_icon", Primitive::Image),
            Field::scalar("is_client_usable", Primitive::Bool),
            Field::choice("active_status", "active_status"),
            Field::scalar("description", Primitive::Text),
            Field::scalar("created_at", Primitive::Timestamp),
            Field::scalar("updated_at", Primitive::Timestamp),
        ],
    },
};

///
/// MANUFACTURER
///

pub const MANUFACTURER: Record = Record {
    ident: "Manufacturer",
    fields: FieldList {
        fields: &[
            Field::required("manufacturer_name", Primitive::Text),
            Field::scalar("manufacturer_logo", Primitive::Image),
            Field::scalar("contact_person", Primitive::Text),
            Field::scalar("contact_number", Primitive::Phone),
            Field::scalar("manufacturer_email", Primitive::Email),
            Field::scalar("manufacturer_address", Primitive::Text),
            Field::relation("product_category", "Category"),
            Field::choice("active_status", "active_status"),
            Field::scalar("description", Primitive::Text),
            Field::scalar("created_at", Primitive::Timestamp),
            Field::scalar("updated_at", Primitive::Timestamp),
        ],
    },
};

///
/// UNIT
///

pub const UNIT: Record = Record {
    ident: "Unit",
    fields: FieldList {
        fields: &[
            Field::required("attribute_name", Primitive::Text),
            Field::scalar("unit_value", Primitive::Text),
            Field::choice("active_status", "active_status"),
            Field::scalar("description", Primitive::Text),
            Field::scalar("created_at", Primitive::Timestamp),
            Field::scalar("updated_at", Primitive::Timestamp),
        ],
    },
};

///
/// VAT
///

pub const VAT: Record = Record {
    ident: "Vat",
    fields: FieldList {
        fields: &[
            Field::required("vat_amount", Primitive::Decimal),
            Field::scalar("value_type", Primitive::Text),
            Field::choice("active_status", "active_status"),
            Field::scalar("description", Primitive::Text),
            Field::scalar("created_at", Primitive::Timestamp),
            Field::scalar("updated_at", Primitive::Timestamp),
        ],
    },
};

///
/// PRODUCT
///

pub const PRODUCT: Record = Record {
    ident: "Product",
    fields: FieldList {
        fields: &[
            Field::scalar("product_id", Primitive::Text),
            Field::required("product_name", Primitive::Text),
            Field::relation("sub_category", "SubCategory"),
            Field::scalar("product_type", Primitive::Text),
            Field::scalar("product_image", Primitive::Image),
            Field::scalar("image_alt_name", Primitive::Text),
            Field::scalar("barcode_type", Primitive::Text),
            Field::scalar("barcode", Primitive::Text),
            Field::relation("purchase_vat", "Vat"),
            Field::relation("sales_vat", "Vat"),
            Field::relation("product_unit", "Unit"),
            Field::relation("brand", "Brand"),
            Field::relation("manufacturer", "Manufacturer"),
            Field::scalar("url_slug", Primitive::Text),
            Field::choice("active_status", "active_status"),
            Field::scalar("description", Primitive::Text),
            Field::scalar("created_at", Primitive::Timestamp),
            Field::scalar("updated_at", Primitive::Timestamp),
        ],
    },
};

static REGISTER: Once = Once::new();

/// Register the catalog schema with the process-wide registry.
/// Idempotent; safe to call from every test binary entry point.
pub fn register() {
    REGISTER.call_once(|| {
        let mut schema = schema_write();

        schema.insert_choice_set(ACTIVE_STATUS);
        for record in [
            BRAND,
            CATEGORY,
            SUB_CATEGORY,
            MANUFACTURER,
            UNIT,
            VAT,
            PRODUCT,
        ] {
            schema.insert_record(record);
        }
    });
}
