//! Editing sessions for a single field or stage definition.
//!
//! An editor accumulates user input and produces one validated definition on
//! submit. Create and edit share the surface, with one asymmetry: a field's
//! name is normalized on every input while creating, and immutable while
//! editing an existing field.

use crate::error::{Result, SchemaError};
use crate::slug::{normalize_field_name, slugify};
use crate::types::{FieldDefinition, FieldOption, FieldType, StageColor, StageDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Edit,
}

/// Editing session for one FieldDefinition.
#[derive(Debug, Clone)]
pub struct FieldEditor {
    mode: Mode,
    draft: FieldDefinition,
}

impl FieldEditor {
    /// Start a new field.
    pub fn create() -> Self {
        Self {
            mode: Mode::Create,
            draft: FieldDefinition::new("", "", FieldType::Text),
        }
    }

    /// Edit an existing field. The name is frozen.
    pub fn edit(existing: &FieldDefinition) -> Self {
        Self {
            mode: Mode::Edit,
            draft: existing.clone(),
        }
    }

    /// Whether this session edits an existing field.
    pub fn is_edit(&self) -> bool {
        self.mode == Mode::Edit
    }

    /// Set the field name from raw input. Normalized (lower-case, whitespace
    /// runs to `_`) in create mode; ignored in edit mode — names are
    /// immutable once created.
    pub fn set_name(&mut self, input: &str) -> &mut Self {
        if self.mode == Mode::Create {
            self.draft.field_name = normalize_field_name(input);
        }
        self
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.draft.field_label = label.into();
        self
    }

    /// Change the field type. Moving away from a selection type clears the
    /// options list.
    pub fn set_field_type(&mut self, field_type: FieldType) -> &mut Self {
        self.draft.field_type = field_type;
        if !field_type.is_selection() {
            self.draft.options.clear();
        }
        self
    }

    pub fn set_section(&mut self, section: impl Into<String>) -> &mut Self {
        self.draft.section = section.into();
        self
    }

    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.draft.is_required = required;
        self
    }

    pub fn set_readonly(&mut self, readonly: bool) -> &mut Self {
        self.draft.is_readonly = readonly;
        self
    }

    pub fn set_show_in_list(&mut self, show: bool) -> &mut Self {
        self.draft.show_in_list = show;
        self
    }

    pub fn set_show_in_form(&mut self, show: bool) -> &mut Self {
        self.draft.show_in_form = show;
        self
    }

    pub fn set_placeholder(&mut self, placeholder: Option<String>) -> &mut Self {
        self.draft.placeholder = placeholder;
        self
    }

    pub fn set_help_text(&mut self, help_text: Option<String>) -> &mut Self {
        self.draft.help_text = help_text;
        self
    }

    pub fn set_default_value(&mut self, default_value: Option<String>) -> &mut Self {
        self.draft.default_value = default_value;
        self
    }

    /// Append an option derived from a label. The value is the slugified
    /// label and the order is the current option count. Returns `false`
    /// without changing anything when the derived value already exists or
    /// the field type takes no options.
    pub fn add_option(&mut self, label: &str) -> bool {
        let value = slugify(label);
        self.add_option_inner(value, label.to_string())
    }

    /// Append an option with an explicit value.
    pub fn add_option_with_value(&mut self, value: impl Into<String>, label: &str) -> bool {
        self.add_option_inner(value.into(), label.to_string())
    }

    fn add_option_inner(&mut self, value: String, label: String) -> bool {
        if !self.draft.field_type.is_selection() {
            return false;
        }
        if self.draft.options.iter().any(|o| o.value == value) {
            return false;
        }
        let order = self.draft.options.len() as i64;
        self.draft.options.push(FieldOption {
            value,
            label,
            order,
        });
        true
    }

    /// Remove an option by index and renumber the rest. Out-of-range is a
    /// no-op returning `false`.
    pub fn remove_option(&mut self, index: usize) -> bool {
        if index >= self.draft.options.len() {
            return false;
        }
        self.draft.options.remove(index);
        crate::ordering::renumber(&mut self.draft.options);
        true
    }

    /// Current options, for rendering the sub-editor.
    pub fn options(&self) -> &[FieldOption] {
        &self.draft.options
    }

    /// Read access to the in-progress draft.
    pub fn draft(&self) -> &FieldDefinition {
        &self.draft
    }

    /// Validate and produce the definition. The caller hands the result to
    /// the configuration session, which decides create-vs-update by name.
    pub fn submit(self) -> Result<FieldDefinition> {
        self.draft.validate()?;
        Ok(self.draft)
    }
}

/// Editing session for one StageDefinition.
#[derive(Debug, Clone)]
pub struct StageEditor {
    mode: Mode,
    draft: StageDefinition,
    value_explicit: bool,
}

impl StageEditor {
    /// Start a new stage.
    pub fn create() -> Self {
        Self {
            mode: Mode::Create,
            draft: StageDefinition {
                value: String::new(),
                label: String::new(),
                color: StageColor::default(),
                order: 0,
                is_active: true,
            },
            value_explicit: false,
        }
    }

    /// Edit an existing stage. The value slug is frozen.
    pub fn edit(existing: &StageDefinition) -> Self {
        Self {
            mode: Mode::Edit,
            draft: existing.clone(),
            value_explicit: true,
        }
    }

    /// Set the label. While creating, the value slug follows the label until
    /// an explicit value is supplied.
    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        let label = label.into();
        if self.mode == Mode::Create && !self.value_explicit {
            self.draft.value = slugify(&label);
        }
        self.draft.label = label;
        self
    }

    /// Set an explicit value slug. Ignored in edit mode.
    pub fn set_value(&mut self, value: &str) -> &mut Self {
        if self.mode == Mode::Create {
            self.draft.value = slugify(value);
            self.value_explicit = true;
        }
        self
    }

    pub fn set_color(&mut self, color: StageColor) -> &mut Self {
        self.draft.color = color;
        self
    }

    pub fn set_active(&mut self, active: bool) -> &mut Self {
        self.draft.is_active = active;
        self
    }

    pub fn draft(&self) -> &StageDefinition {
        &self.draft
    }

    /// Validate and produce the stage definition.
    pub fn submit(self) -> Result<StageDefinition> {
        if self.draft.value.trim().is_empty() {
            return Err(SchemaError::MissingName);
        }
        if self.draft.label.trim().is_empty() {
            return Err(SchemaError::MissingLabel);
        }
        Ok(self.draft)
    }
}
