use shelf_schema::error::SchemaError;
use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Programmer or deployment mistakes: an undeclared record type, an
/// action outside the supported set, a bad environment value. These are
/// propagated as errors and expected to surface as a 500-class response
/// upstream. Malformed client input never produces a `ConfigError`; it
/// is always returned as data.
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("unsupported query action: '{action}' (allowed: list, details)")]
    UnsupportedAction { action: String },

    #[error("invalid value '{value}' for {var}")]
    InvalidEnv { var: &'static str, value: String },

    #[error(transparent)]
    Schema(#[from] shelf_schema::Error),
}

impl From<SchemaError> for ConfigError {
    fn from(err: SchemaError) -> Self {
        Self::Schema(err.into())
    }
}
