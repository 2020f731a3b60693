//! Error types for the persistence gateway

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur loading or saving entity configurations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No configuration exists for this key. A defined branch, not a fault:
    /// callers synthesize the canonical empty configuration.
    #[error("no configuration for {module}/{entity}")]
    NotFound { module: String, entity: String },

    /// The configuration was rejected as malformed
    #[error("invalid configuration: {message}")]
    Validation { message: String },

    /// The backing service could not be reached
    #[error("transport failure: {message}")]
    Transport { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl StoreError {
    /// Create a not-found error
    pub fn not_found(module: impl Into<String>, entity: impl Into<String>) -> Self {
        Self::NotFound {
            module: module.into(),
            entity: entity.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Whether this is the not-found branch
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<powerdesk_fields::SchemaError> for StoreError {
    fn from(err: powerdesk_fields::SchemaError) -> Self {
        Self::Validation {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::not_found("crm", "leads");
        assert_eq!(err.to_string(), "no configuration for crm/leads");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_schema_error_converts_to_validation() {
        let err: StoreError = powerdesk_fields::SchemaError::duplicate_field("email").into();
        assert!(matches!(err, StoreError::Validation { .. }));
        assert!(err.to_string().contains("email"));
    }
}
