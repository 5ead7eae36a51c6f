//! Module: validate::query
//! Responsibility: allow-list screening of query-string keys per action.
//! Does not own: parameter value parsing or filter execution.
//!
//! Centralizing the allow-list keeps endpoints from silently accepting
//! undocumented filters; this is the only gate between free-form query
//! strings and the persistence layer's filtering logic.

use crate::error::ConfigError;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Query parameter names every `list` request may carry.
pub const LIST_QUERY_PARAMS: [&str; 8] = [
    "limit",
    "offset",
    "field_list",
    "ordering",
    "query",
    "to_date",
    "from_date",
    "active_status",
];

/// Query parameter names every `details` request may carry.
pub const DETAILS_QUERY_PARAMS: [&str; 1] = ["field_list"];

///
/// QueryAction
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryAction {
    Details,
    List,
}

impl QueryAction {
    /// Base allow-list for this action, before caller extensions.
    #[must_use]
    pub const fn base_params(self) -> &'static [&'static str] {
        match self {
            Self::Details => &DETAILS_QUERY_PARAMS,
            Self::List => &LIST_QUERY_PARAMS,
        }
    }
}

impl fmt::Display for QueryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Details => "details",
            Self::List => "list",
        };
        write!(f, "{label}")
    }
}

impl FromStr for QueryAction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "details" => Ok(Self::Details),
            "list" => Ok(Self::List),
            other => Err(ConfigError::UnsupportedAction {
                action: other.to_string(),
            }),
        }
    }
}

///
/// ValidationOutcome
///
/// Fresh per call; never mutated after construction. `allowed` is the
/// full allow-list used for the comparison so error envelopes can echo
/// it without recomputing.
///

#[derive(Clone, Debug, Serialize)]
pub struct ValidationOutcome {
    pub allowed: BTreeSet<String>,
    pub invalid: BTreeSet<String>,
}

impl ValidationOutcome {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Screen query-string keys against the allow-list for `action`.
///
/// `extended` is unioned into the base set before the comparison; it
/// carries entity-specific filterable relation fields such as a foreign
/// key ident. Actions outside `{list, details}` fail with
/// [`ConfigError::UnsupportedAction`].
pub fn validate_query_params(
    action: &str,
    query_keys: &BTreeSet<String>,
    extended: Option<&[&str]>,
) -> Result<ValidationOutcome, ConfigError> {
    let action = QueryAction::from_str(action)?;

    Ok(screen_query_params(action, query_keys, extended))
}

/// [`validate_query_params`] for an already-parsed action.
#[must_use]
pub fn screen_query_params(
    action: QueryAction,
    query_keys: &BTreeSet<String>,
    extended: Option<&[&str]>,
) -> ValidationOutcome {
    let mut allowed: BTreeSet<String> = action
        .base_params()
        .iter()
        .map(ToString::to_string)
        .collect();

    if let Some(extra) = extended {
        allowed.extend(extra.iter().map(ToString::to_string));
    }

    let invalid: BTreeSet<String> = query_keys
        .iter()
        .filter(|key| !allowed.contains(*key))
        .cloned()
        .collect();

    if !invalid.is_empty() {
        tracing::warn!(%action, ?invalid, "invalid query parameters");
    }

    ValidationOutcome { allowed, invalid }
}
