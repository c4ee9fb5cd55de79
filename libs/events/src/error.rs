//! Error types for event construction.

use eventforge_id::IdError;
use thiserror::Error;

/// Errors raised while constructing an [`Event`](crate::Event).
///
/// A construction error means the event was never created; no partially
/// initialised value is observable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// The event type is empty or whitespace only.
    #[error("event type cannot be blank")]
    BlankType,

    /// The event source is empty or whitespace only.
    #[error("event source cannot be blank")]
    BlankSource,

    /// The event version is zero or negative.
    #[error("event version must be positive, got {version}")]
    NonPositiveVersion { version: i32 },

    /// A required field was not supplied.
    #[error("required field missing: {0}")]
    MissingField(&'static str),

    /// A supplied event ID could not be parsed.
    #[error("invalid event id: {0}")]
    InvalidId(#[from] IdError),
}

impl ConstructionError {
    /// Stable reason code for this error.
    pub fn reason_code(&self) -> &'static str {
        match self {
            ConstructionError::BlankType => "blank_type",
            ConstructionError::BlankSource => "blank_source",
            ConstructionError::NonPositiveVersion { .. } => "non_positive_version",
            ConstructionError::MissingField(_) => "missing_field",
            ConstructionError::InvalidId(_) => "invalid_id",
        }
    }

    /// Returns the name of the field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ConstructionError::BlankType => "type",
            ConstructionError::BlankSource => "source",
            ConstructionError::NonPositiveVersion { .. } => "version",
            ConstructionError::MissingField(field) => field,
            ConstructionError::InvalidId(_) => "id",
        }
    }

    /// Returns true if this error indicates an absent field.
    pub fn is_missing(&self) -> bool {
        matches!(self, ConstructionError::MissingField(_))
    }
}
