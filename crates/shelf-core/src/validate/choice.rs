//! Module: validate::choice
//! Responsibility: membership checks against a fixed choice set.
//! Does not own: resolving choice sets from the registry.

use serde::Serialize;
use shelf_schema::node::ChoiceSet;

///
/// ChoiceOutcome
///
/// Always carries the full member list, valid or not, so the caller can
/// build a "must be one of X" message without a second lookup.
///

#[derive(Clone, Debug, Serialize)]
pub struct ChoiceOutcome {
    pub is_valid: bool,
    pub members: Vec<&'static str>,
}

/// Check a submitted value against a choice set.
#[must_use]
pub fn validate_choice(set: &ChoiceSet, value: &str) -> ChoiceOutcome {
    let is_valid = set.contains(value);

    if !is_valid {
        tracing::warn!(set = set.ident, value, "invalid choice value");
    }

    ChoiceOutcome {
        is_valid,
        members: set.members(),
    }
}
