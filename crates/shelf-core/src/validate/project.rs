//! Module: validate::project
//! Responsibility: parsing a comma-separated field-selection or ordering
//! string into valid/invalid partitions against declared fields.
//! Does not own: serialization of projected fields or sort execution.

use serde::Serialize;
use thiserror::Error as ThisError;

///
/// ProjectError
///
/// An empty selection reaching this layer means the caller failed to
/// short-circuit on an absent query parameter. That is a caller bug, not
/// a user input problem, so it is an error rather than a soft partition.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ProjectError {
    #[error("field_list cannot be an empty or whitespace-only string")]
    EmptyFieldList,
}

///
/// ProjectionMode
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Tokens must exactly match a declared field name.
    #[default]
    FieldList,

    /// Tokens may carry one leading `-` as a descending marker.
    Ordering,
}

///
/// FieldSelection
///
/// Stable partition of the caller's tokens. Order mirrors the input,
/// not the declared-field order, and repeated tokens are kept: a
/// multi-key sort must apply its fields left to right exactly as the
/// caller specified them.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct FieldSelection {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

/// Split a comma-separated selection string and partition the tokens
/// against `declared`.
///
/// Tokens are trimmed and empty tokens dropped. In ordering mode a
/// single leading `-` is stripped for the membership test but retained
/// in the valid output, so the descending marker survives into the sort
/// clause. `extended` names are pre-vetted relation aliases and are
/// appended to `valid` unconditionally.
pub fn project_fields(
    field_list: &str,
    declared: &[&str],
    mode: ProjectionMode,
    extended: Option<&[&str]>,
) -> Result<FieldSelection, ProjectError> {
    if field_list.trim().is_empty() {
        return Err(ProjectError::EmptyFieldList);
    }

    let mut selection = FieldSelection::default();

    for token in field_list.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let probe = match mode {
            ProjectionMode::Ordering => token.strip_prefix('-').unwrap_or(token),
            ProjectionMode::FieldList => token,
        };

        if declared.contains(&probe) {
            selection.valid.push(token.to_string());
        } else {
            selection.invalid.push(token.to_string());
        }
    }

    if let Some(extra) = extended {
        selection
            .valid
            .extend(extra.iter().map(ToString::to_string));
    }

    Ok(selection)
}
