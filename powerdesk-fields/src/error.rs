//! Error types for the configuration schema

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur while building or validating configuration schema
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Identifier (field name or stage value) missing
    #[error("identifier is required")]
    MissingName,

    /// Display label missing
    #[error("label is required")]
    MissingLabel,

    /// Duplicate field name within an entity configuration
    #[error("duplicate field name: {name}")]
    DuplicateFieldName { name: String },

    /// Duplicate stage value within an entity configuration
    #[error("duplicate stage value: {value}")]
    DuplicateStageValue { value: String },

    /// Duplicate option value within a field
    #[error("duplicate option value: {value}")]
    DuplicateOptionValue { value: String },

    /// Options supplied for a non-selection field type
    #[error("field type '{field_type}' does not take options")]
    OptionsNotAllowed { field_type: String },

    /// Default value does not match the field type's value shape
    #[error("invalid default value for '{field}': expected {expected}")]
    InvalidDefaultValue { field: String, expected: String },

    /// Reorder position outside the sequence
    #[error("position {index} out of range for {len} items")]
    PositionOutOfRange { index: usize, len: usize },
}

impl SchemaError {
    /// Create a duplicate field name error
    pub fn duplicate_field(name: impl Into<String>) -> Self {
        Self::DuplicateFieldName { name: name.into() }
    }

    /// Create an invalid default value error
    pub fn invalid_default(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidDefaultValue {
            field: field.into(),
            expected: expected.into(),
        }
    }
}
