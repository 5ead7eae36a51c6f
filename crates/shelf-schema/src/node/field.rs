use crate::prelude::*;
use std::ops::Not;

///
/// FieldList
///

#[derive(Clone, Debug, Serialize)]
pub struct FieldList {
    pub fields: &'static [Field],
}

impl FieldList {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    #[must_use]
    pub fn contains(&self, ident: &str) -> bool {
        self.get(ident).is_some()
    }

    /// Declared field idents, in declaration order.
    #[must_use]
    pub fn idents(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.ident).collect()
    }

    /// Idents of required fields, in declaration order.
    #[must_use]
    pub fn required_idents(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.ident)
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

///
/// Field
///

#[derive(Clone, Debug, Serialize)]
pub struct Field {
    pub ident: &'static str,
    pub kind: FieldKind,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub required: bool,
}

impl Field {
    /// Shorthand for an optional scalar field.
    #[must_use]
    pub const fn scalar(ident: &'static str, primitive: Primitive) -> Self {
        Self {
            ident,
            kind: FieldKind::Scalar(primitive),
            required: false,
        }
    }

    /// Shorthand for a required scalar field.
    #[must_use]
    pub const fn required(ident: &'static str, primitive: Primitive) -> Self {
        Self {
            ident,
            kind: FieldKind::Scalar(primitive),
            required: true,
        }
    }

    /// Shorthand for an optional choice field.
    #[must_use]
    pub const fn choice(ident: &'static str, set: &'static str) -> Self {
        Self {
            ident,
            kind: FieldKind::Choice { set },
            required: false,
        }
    }

    /// Shorthand for a relation field.
    #[must_use]
    pub const fn relation(ident: &'static str, record: &'static str) -> Self {
        Self {
            ident,
            kind: FieldKind::Relation { record },
            required: false,
        }
    }
}
