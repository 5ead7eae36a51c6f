//! Schema descriptors for Shelf: record types, their fields, choice sets,
//! and the process-wide registry the validation layer reads.

pub mod build;
pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for record schema identifiers.
pub const MAX_RECORD_NAME_LEN: usize = 64;

/// Maximum length for field schema identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

use crate::{build::BuildError, error::SchemaError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::{ErrorTree, SchemaError},
        node::{ChoiceSet, ChoiceVariant, Field, FieldList, Record, Schema},
        types::{FieldKind, Primitive},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    SchemaError(#[from] SchemaError),
}
