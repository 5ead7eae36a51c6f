//! Shelf: schema-driven request validation and response envelopes for
//! catalog APIs.
//!
//! ## Crate layout
//! - `core`: field/query validators, response projection, envelopes,
//!   pagination, and backend configuration.
//! - `schema`: record and choice-set descriptors plus the process-wide
//!   registry views read from.
//!
//! The `prelude` module mirrors the surface view code uses: register
//! descriptors at startup, then screen every request through the
//! validators and wrap every outcome in an envelope.

pub use shelf_core as core;
pub use shelf_schema as schema;

use thiserror::Error as ThisError;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] shelf_core::error::ConfigError),

    #[error(transparent)]
    Schema(#[from] shelf_schema::Error),
}

///
/// Prelude
///

pub mod prelude {
    pub use shelf_core::prelude::*;
    pub use shelf_schema::{
        build::{get_schema, schema_write},
        node::{ChoiceSet, ChoiceVariant, Field, FieldList, Record, Schema},
        types::{FieldKind, Primitive},
    };
}
