//! Error types for the configuration session

use thiserror::Error;

use powerdesk_fields::SchemaError;
use powerdesk_store::StoreError;

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur in a configuration session
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session was opened without edit rights
    #[error("configuration session is read-only")]
    ReadOnly,

    /// A load or save is already outstanding
    #[error("an operation is already in progress")]
    Busy,

    /// No configuration has been loaded yet
    #[error("no configuration loaded")]
    NoDraft,

    /// Named field does not exist in the draft
    #[error("unknown field: {name}")]
    UnknownField { name: String },

    /// Named stage does not exist in the draft
    #[error("unknown stage: {value}")]
    UnknownStage { value: String },

    /// Draft mutation rejected by schema validation. Recoverable; the draft
    /// is left exactly as it was.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The persistence gateway failed. After a failed save the draft and
    /// dirty flag are preserved so the user can retry.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SessionError {
    /// Create an unknown-field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Create an unknown-stage error
    pub fn unknown_stage(value: impl Into<String>) -> Self {
        Self::UnknownStage {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SessionError::unknown_field("customer_type").to_string(),
            "unknown field: customer_type"
        );
        assert_eq!(
            SessionError::ReadOnly.to_string(),
            "configuration session is read-only"
        );
    }

    #[test]
    fn test_schema_error_passes_through() {
        let err: SessionError = SchemaError::MissingLabel.into();
        assert_eq!(err.to_string(), "label is required");
    }
}
