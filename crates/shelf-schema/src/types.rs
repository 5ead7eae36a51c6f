use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Primitive
///
/// Scalar vocabulary for catalog fields. Only the kinds the catalog
/// actually stores are represented; wire formats are not this crate's
/// concern.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Primitive {
    Bool,
    Date,
    Decimal,
    Email,
    Image,
    Int,
    Nat,
    Phone,
    Text,
    Timestamp,
    Url,
}

impl Primitive {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Decimal | Self::Int | Self::Nat)
    }

    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::Email | Self::Phone | Self::Text | Self::Url)
    }

    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Timestamp)
    }
}

///
/// FieldKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum FieldKind {
    /// Plain scalar column.
    Scalar(Primitive),

    /// Value constrained to a named [`crate::node::ChoiceSet`].
    Choice { set: &'static str },

    /// Reference to another record type.
    Relation { record: &'static str },
}

impl FieldKind {
    /// Choice-set ident this field is constrained to, if any.
    #[must_use]
    pub const fn choice_set(&self) -> Option<&'static str> {
        match self {
            Self::Choice { set } => Some(set),
            _ => None,
        }
    }

    /// Target record ident for relation fields, if any.
    #[must_use]
    pub const fn relation_target(&self) -> Option<&'static str> {
        match self {
            Self::Relation { record } => Some(record),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_groups_do_not_overlap() {
        for p in [Primitive::Decimal, Primitive::Int, Primitive::Nat] {
            assert!(p.is_numeric());
            assert!(!p.is_textual());
            assert!(!p.is_temporal());
        }

        assert!(Primitive::Timestamp.is_temporal());
        assert!(Primitive::Url.is_textual());
    }

    #[test]
    fn field_kind_accessors() {
        let choice = FieldKind::Choice {
            set: "active_status",
        };
        assert_eq!(choice.choice_set(), Some("active_status"));
        assert_eq!(choice.relation_target(), None);

        let relation = FieldKind::Relation { record: "Brand" };
        assert_eq!(relation.relation_target(), Some("Brand"));
        assert_eq!(relation.choice_set(), None);

        assert_eq!(FieldKind::Scalar(Primitive::Text).choice_set(), None);
    }
}
