//! Core field and stage types for the configuration registry.
//!
//! All types serialize to/from YAML via serde. Field definitions describe
//! named, typed form fields; stage definitions describe the steps of an
//! entity's kanban workflow.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::slug::slugify;

/// The type of a field — determines what shape the value takes and which
/// input control a form renders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Currency,
    Email,
    Phone,
    Date,
    Select,
    MultiSelect,
    Checkbox,
    Textarea,
    /// System-computed value. Always read-only; never edited in a form.
    Auto,
}

/// The input control a form renders for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    TextInput,
    NumberInput,
    CurrencyInput,
    EmailInput,
    PhoneInput,
    DatePicker,
    Dropdown,
    MultiDropdown,
    Checkbox,
    TextArea,
    ReadOnly,
}

/// What a valid value for a field looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Text,
    Numeric,
    Boolean,
    /// ISO date string, `YYYY-MM-DD`
    Date,
    /// One of the field's option values
    OptionValue,
    /// Comma-separated subset of the field's option values
    OptionList,
    /// Derived by the system; never supplied by a user
    Computed,
}

impl FieldType {
    /// The input control rendered for this type.
    pub fn widget(&self) -> Widget {
        match self {
            FieldType::Text => Widget::TextInput,
            FieldType::Number => Widget::NumberInput,
            FieldType::Currency => Widget::CurrencyInput,
            FieldType::Email => Widget::EmailInput,
            FieldType::Phone => Widget::PhoneInput,
            FieldType::Date => Widget::DatePicker,
            FieldType::Select => Widget::Dropdown,
            FieldType::MultiSelect => Widget::MultiDropdown,
            FieldType::Checkbox => Widget::Checkbox,
            FieldType::Textarea => Widget::TextArea,
            FieldType::Auto => Widget::ReadOnly,
        }
    }

    /// The shape a valid value takes.
    pub fn value_shape(&self) -> ValueShape {
        match self {
            FieldType::Text | FieldType::Email | FieldType::Phone | FieldType::Textarea => {
                ValueShape::Text
            }
            FieldType::Number | FieldType::Currency => ValueShape::Numeric,
            FieldType::Date => ValueShape::Date,
            FieldType::Select => ValueShape::OptionValue,
            FieldType::MultiSelect => ValueShape::OptionList,
            FieldType::Checkbox => ValueShape::Boolean,
            FieldType::Auto => ValueShape::Computed,
        }
    }

    /// Whether this type carries an options list.
    pub fn is_selection(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::MultiSelect)
    }

    /// The stable serialized tag, e.g. `multiselect`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Currency => "currency",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Date => "date",
            FieldType::Select => "select",
            FieldType::MultiSelect => "multiselect",
            FieldType::Checkbox => "checkbox",
            FieldType::Textarea => "textarea",
            FieldType::Auto => "auto",
        }
    }
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Text
    }
}

/// A single option in a select or multi-select field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub order: i64,
}

impl FieldOption {
    /// Build an option from a label, deriving the value slug.
    pub fn from_label(label: impl Into<String>, order: i64) -> Self {
        let label = label.into();
        Self {
            value: slugify(&label),
            label,
            order,
        }
    }
}

fn default_section() -> String {
    "General".to_string()
}

fn default_true() -> bool {
    true
}

/// A field definition — the complete schema for one form field.
///
/// `field_name` is the stable identifier, unique across the whole entity
/// configuration regardless of section, and immutable once created; renaming
/// is modeled as delete + create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDefinition {
    pub field_name: String,
    pub field_label: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default = "default_section")]
    pub section: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_readonly: bool,
    #[serde(default)]
    pub show_in_list: bool,
    #[serde(default = "default_true")]
    pub show_in_form: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default)]
    pub display_order: i64,
}

impl FieldDefinition {
    /// Create a field with the common defaults.
    pub fn new(
        field_name: impl Into<String>,
        field_label: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            field_label: field_label.into(),
            field_type,
            section: default_section(),
            is_required: false,
            is_readonly: false,
            show_in_list: false,
            show_in_form: true,
            placeholder: None,
            help_text: None,
            default_value: None,
            options: Vec::new(),
            display_order: 0,
        }
    }

    /// Whether consumers must render this field read-only. `auto` fields are
    /// read-only regardless of the flag.
    pub fn is_effectively_readonly(&self) -> bool {
        self.is_readonly || self.field_type == FieldType::Auto
    }

    /// Validate this definition in isolation: option invariants and the
    /// default value's shape.
    pub fn validate(&self) -> Result<()> {
        if self.field_name.trim().is_empty() {
            return Err(SchemaError::MissingName);
        }
        if self.field_label.trim().is_empty() {
            return Err(SchemaError::MissingLabel);
        }

        if self.field_type.is_selection() {
            let mut seen = std::collections::HashSet::new();
            for option in &self.options {
                if !seen.insert(option.value.as_str()) {
                    return Err(SchemaError::DuplicateOptionValue {
                        value: option.value.clone(),
                    });
                }
            }
        } else if !self.options.is_empty() {
            return Err(SchemaError::OptionsNotAllowed {
                field_type: self.field_type.as_str().to_string(),
            });
        }

        if let Some(ref raw) = self.default_value {
            self.check_default_shape(raw)?;
        }

        Ok(())
    }

    fn check_default_shape(&self, raw: &str) -> Result<()> {
        let ok = match self.field_type.value_shape() {
            ValueShape::Text => true,
            ValueShape::Numeric => raw.parse::<f64>().is_ok(),
            ValueShape::Boolean => raw == "true" || raw == "false",
            ValueShape::Date => chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok(),
            ValueShape::OptionValue => self.options.iter().any(|o| o.value == raw),
            ValueShape::OptionList => raw
                .split(',')
                .map(str::trim)
                .all(|v| self.options.iter().any(|o| o.value == v)),
            ValueShape::Computed => false,
        };
        if ok {
            Ok(())
        } else {
            Err(SchemaError::invalid_default(
                &self.field_name,
                match self.field_type.value_shape() {
                    ValueShape::Text => "text",
                    ValueShape::Numeric => "numeric literal",
                    ValueShape::Boolean => "true or false",
                    ValueShape::Date => "ISO date (YYYY-MM-DD)",
                    ValueShape::OptionValue => "an existing option value",
                    ValueShape::OptionList => "comma-separated option values",
                    ValueShape::Computed => "no default (system-computed)",
                },
            ))
        }
    }
}

/// The closed palette for stage colors. Purely presentational; consumers map
/// tokens to their own theme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StageColor {
    Gray,
    Blue,
    Yellow,
    Purple,
    Green,
    Red,
    Orange,
}

impl StageColor {
    /// Every palette token, in display order.
    pub fn palette() -> &'static [StageColor] {
        &[
            StageColor::Gray,
            StageColor::Blue,
            StageColor::Yellow,
            StageColor::Purple,
            StageColor::Green,
            StageColor::Red,
            StageColor::Orange,
        ]
    }
}

impl Default for StageColor {
    fn default() -> Self {
        StageColor::Gray
    }
}

/// One step of an entity's kanban workflow.
///
/// Inactive stages are excluded from workflow transitions but retained so
/// historical records still classify.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageDefinition {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub color: StageColor,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl StageDefinition {
    /// Create a stage from a label, deriving the value slug.
    pub fn new(label: impl Into<String>, color: StageColor, order: i64) -> Self {
        let label = label.into();
        Self {
            value: slugify(&label),
            label,
            color,
            order,
            is_active: true,
        }
    }
}
