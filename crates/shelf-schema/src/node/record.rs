use crate::prelude::*;

///
/// Record
///
/// A record-type descriptor: the named entity schema a view validates
/// payloads and query strings against. Declared once at startup and
/// never mutated afterwards.
///

#[derive(Clone, Debug, Serialize)]
pub struct Record {
    pub ident: &'static str,
    pub fields: FieldList,
}

impl Record {
    #[must_use]
    pub fn field(&self, ident: &str) -> Option<&Field> {
        self.fields.get(ident)
    }

    /// Declared field idents, in declaration order.
    #[must_use]
    pub fn field_idents(&self) -> Vec<&'static str> {
        self.fields.idents()
    }

    /// Idents of fields a create payload must carry.
    #[must_use]
    pub fn required_field_idents(&self) -> Vec<&'static str> {
        self.fields.required_idents()
    }
}
