//! Request-side validation: payload field screening, query-parameter
//! allow-lists, response field projection, and choice membership.
//!
//! Every function here is a pure decision over the registered schema and
//! its inputs. Input problems are returned as data; only configuration
//! mistakes (unknown record type, unsupported action) become errors.

pub mod choice;
pub mod project;
pub mod query;
pub mod request;


pub use choice::{ChoiceOutcome, validate_choice};
pub use project::{FieldSelection, ProjectError, ProjectionMode, project_fields};
pub use query::{QueryAction, ValidationOutcome, validate_query_params};
pub use request::{RequiredFieldsReport, invalid_request_fields, missing_required_fields};
