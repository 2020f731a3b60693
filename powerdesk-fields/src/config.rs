//! EntityConfig — the full configuration of one entity within a module.
//!
//! Aggregates field definitions, kanban stages and the derived list-view
//! column set for a `(module, entity)` key. Configurations are created
//! implicitly: loading a key that was never configured yields
//! `EntityConfig::empty`, and nothing is durable until an explicit save.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, SchemaError};
use crate::slug::title_case;
use crate::types::{FieldDefinition, StageDefinition};

/// Configuration of a single entity: its fields, its workflow stages, and
/// (derived) its list-view columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityConfig {
    pub module: String,
    pub entity: String,
    #[serde(default)]
    pub entity_label: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    /// Empty means this entity has no stage-based workflow.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kanban_stages: Vec<StageDefinition>,
}

impl EntityConfig {
    /// The canonical empty configuration for a key that has never been
    /// configured. Loading a missing key yields this, not an error.
    pub fn empty(module: impl Into<String>, entity: impl Into<String>) -> Self {
        let entity = entity.into();
        Self {
            module: module.into(),
            entity_label: title_case(&entity),
            entity,
            fields: Vec::new(),
            kanban_stages: Vec::new(),
        }
    }

    /// Display label, falling back to a title-cased derivation of the
    /// entity slug when none was set.
    pub fn label(&self) -> String {
        if self.entity_label.trim().is_empty() {
            title_case(&self.entity)
        } else {
            self.entity_label.clone()
        }
    }

    /// Find a field by name, any section.
    pub fn find_field(&self, field_name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.field_name == field_name)
    }

    /// Whether a field with this name exists, any section.
    pub fn has_field(&self, field_name: &str) -> bool {
        self.find_field(field_name).is_some()
    }

    /// Section keys in first-appearance order.
    pub fn sections(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.fields
            .iter()
            .map(|f| f.section.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Fields of one section, sorted by display order.
    pub fn fields_in_section(&self, section: &str) -> Vec<&FieldDefinition> {
        let mut fields: Vec<&FieldDefinition> = self
            .fields
            .iter()
            .filter(|f| f.section == section)
            .collect();
        fields.sort_by_key(|f| f.display_order);
        fields
    }

    /// The derived list-view column set: fields flagged `show_in_list`,
    /// sorted by display order. Never stored separately; always recomputed.
    pub fn list_display_fields(&self) -> Vec<&FieldDefinition> {
        let mut fields: Vec<&FieldDefinition> =
            self.fields.iter().filter(|f| f.show_in_list).collect();
        fields.sort_by_key(|f| f.display_order);
        fields
    }

    /// Stages available for workflow transitions, sorted by order. Inactive
    /// stages are excluded but remain in `kanban_stages` for classification.
    pub fn active_stages(&self) -> Vec<&StageDefinition> {
        let mut stages: Vec<&StageDefinition> =
            self.kanban_stages.iter().filter(|s| s.is_active).collect();
        stages.sort_by_key(|s| s.order);
        stages
    }

    /// Validate the whole configuration: field-name uniqueness across all
    /// sections, stage-value uniqueness, and per-field invariants.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for field in &self.fields {
            field.validate()?;
            if !names.insert(field.field_name.as_str()) {
                return Err(SchemaError::duplicate_field(&field.field_name));
            }
        }

        let mut values = HashSet::new();
        for stage in &self.kanban_stages {
            if stage.value.trim().is_empty() {
                return Err(SchemaError::MissingName);
            }
            if stage.label.trim().is_empty() {
                return Err(SchemaError::MissingLabel);
            }
            if !values.insert(stage.value.as_str()) {
                return Err(SchemaError::DuplicateStageValue {
                    value: stage.value.clone(),
                });
            }
        }

        Ok(())
    }
}
