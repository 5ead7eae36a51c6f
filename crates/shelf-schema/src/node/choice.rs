use crate::prelude::*;
use std::ops::Not;

///
/// ChoiceSet
///
/// A named, immutable enumeration referenced by choice fields,
/// e.g. `active_status = {active, inactive}`.
///

#[derive(Clone, Debug, Serialize)]
pub struct ChoiceSet {
    pub ident: &'static str,
    pub variants: &'static [ChoiceVariant],
}

impl ChoiceSet {
    /// All member values, in declaration order.
    #[must_use]
    pub fn members(&self) -> Vec<&'static str> {
        self.variants.iter().map(|v| v.value).collect()
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.variants.iter().any(|v| v.value == value)
    }

    #[must_use]
    pub fn default_variant(&self) -> Option<&ChoiceVariant> {
        self.variants.iter().find(|v| v.default)
    }
}

///
/// ChoiceVariant
///

#[derive(Clone, Debug, Serialize)]
pub struct ChoiceVariant {
    pub value: &'static str,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub default: bool,
}

impl ChoiceVariant {
    #[must_use]
    pub const fn new(value: &'static str) -> Self {
        Self {
            value,
            default: false,
        }
    }

    #[must_use]
    pub const fn default_value(value: &'static str) -> Self {
        Self {
            value,
            default: true,
        }
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

    #[test]
    fn members_preserve_declaration_order() {
        assert_eq!(ACTIVE_STATUS.members(), ["active", "inactive"]);
    }

    #[test]
    fn membership_is_exact() {
        assert!(ACTIVE_STATUS.contains("active"));
        assert!(!ACTIVE_STATUS.contains("Active"));
        assert!(!ACTIVE_STATUS.contains("pending"));
    }

    #[test]
    fn default_variant_is_flagged() {
        let default = ACTIVE_STATUS.default_variant().expect("default declared");
        assert_eq!(default.value, "active");
    }
}
