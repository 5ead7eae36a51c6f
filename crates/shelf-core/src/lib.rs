//! Core validation layer for Shelf: request-field screening, query
//! parameter gating, response field projection, choice checks, and the
//! uniform response envelopes every view returns.

pub mod catalog;
pub mod config;
pub mod error;
pub mod paginate;
pub mod response;
pub mod validate;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains the request-path vocabulary only. Configuration and
/// pagination helpers are imported from their modules directly.
///

pub mod prelude {
    pub use crate::{
        error::ConfigError,
        response::{
            Audience, ErrorKind, ErrorResponse, Links, NoContentResponse, NotFoundResponse,
            SuccessResponse, UpdateResponse, response_links,
        },
        validate::{
            ChoiceOutcome, FieldSelection, ProjectError, ProjectionMode, QueryAction,
            RequiredFieldsReport, ValidationOutcome, invalid_request_fields,
            missing_required_fields, project_fields, validate_choice, validate_query_params,
        },
    };
}
