//! Validation failures.

use thiserror::Error;

/// The reason an event was rejected by a rule.
///
/// The pipeline returns the first failure unchanged; the `Display` form is
/// the human-readable reason.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Source length is outside the allowed bounds.
    #[error("event source identifier must be between {min} and {max} characters, got {len}")]
    SourceLength { len: usize, min: usize, max: usize },

    /// Source contains a whitespace character.
    #[error("event source must not contain whitespace")]
    SourceWhitespace,

    /// Source contains none of the namespace separators.
    #[error("event source must be a namespaced identifier (one of '{separators}')")]
    SourceNotNamespaced { separators: String },

    /// Type has no `.` between domain and action.
    #[error("event type must follow the format <domain>.<action>")]
    TypeMissingSeparator,

    /// Type starts or ends with `.`.
    #[error("event type cannot start or end with a dot")]
    TypeEdgeSeparator,

    /// Rejected by a caller-defined rule.
    #[error("{rule}: {reason}")]
    Rejected { rule: String, reason: String },
}

impl ValidationError {
    /// Creates a rejection for a caller-defined rule.
    pub fn rejected(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::Rejected {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Stable reason code for this failure.
    pub fn reason_code(&self) -> &'static str {
        match self {
            ValidationError::SourceLength { .. } => "source_length",
            ValidationError::SourceWhitespace => "source_whitespace",
            ValidationError::SourceNotNamespaced { .. } => "source_not_namespaced",
            ValidationError::TypeMissingSeparator => "type_missing_separator",
            ValidationError::TypeEdgeSeparator => "type_edge_separator",
            ValidationError::Rejected { .. } => "rejected",
        }
    }

    /// Human-readable reason.
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Returns true if the failure concerns the event source.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            ValidationError::SourceLength { .. }
                | ValidationError::SourceWhitespace
                | ValidationError::SourceNotNamespaced { .. }
        )
    }

    /// Returns true if the failure concerns the event type.
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            ValidationError::TypeMissingSeparator | ValidationError::TypeEdgeSeparator
        )
    }
}
