//! ModuleCatalog — the directory of modules and their configurable entities.
//!
//! Read-only from the registry's perspective; populated by the persistence
//! layer (built-in defaults or a `modules.yaml` override). Insertion order is
//! display order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::slug::title_case;

/// One module: display label plus its configurable entities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleEntry {
    pub label: String,
    /// entity_key → entity_label
    #[serde(default)]
    pub entities: IndexMap<String, String>,
}

/// Directory of modules, keyed by module slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleCatalog {
    #[serde(default)]
    pub modules: IndexMap<String, ModuleEntry>,
}

impl ModuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module.
    pub fn module(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.modules.insert(
            key.into(),
            ModuleEntry {
                label: label.into(),
                entities: IndexMap::new(),
            },
        );
        self
    }

    /// Add an entity under a module. Creates the module with a title-cased
    /// label if it was not declared first.
    pub fn entity(
        mut self,
        module_key: impl Into<String>,
        entity_key: impl Into<String>,
        entity_label: impl Into<String>,
    ) -> Self {
        let module_key = module_key.into();
        let entry = self
            .modules
            .entry(module_key.clone())
            .or_insert_with(|| ModuleEntry {
                label: title_case(&module_key),
                entities: IndexMap::new(),
            });
        entry.entities.insert(entity_key.into(), entity_label.into());
        self
    }

    /// Look up a module entry.
    pub fn get(&self, module_key: &str) -> Option<&ModuleEntry> {
        self.modules.get(module_key)
    }

    /// Display label for a module.
    pub fn module_label(&self, module_key: &str) -> Option<&str> {
        self.get(module_key).map(|m| m.label.as_str())
    }

    /// Display label for an entity.
    pub fn entity_label(&self, module_key: &str, entity_key: &str) -> Option<&str> {
        self.get(module_key)
            .and_then(|m| m.entities.get(entity_key))
            .map(String::as_str)
    }

    /// Whether this `(module, entity)` pair is listed.
    pub fn contains(&self, module_key: &str, entity_key: &str) -> bool {
        self.entity_label(module_key, entity_key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }
}
