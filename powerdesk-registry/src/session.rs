//! ConfigSession — the single mutable surface for one entity-config edit cycle.
//!
//! The session owns the in-memory draft of one [`EntityConfig`], tracks
//! whether it diverged from the last persisted state, applies field and stage
//! mutations through wholesale setters (the only mutation entry points, which
//! keeps consistency checks in one place), and on save hands the draft to the
//! persistence gateway and fires the change notifier.
//!
//! There is exactly one draft at a time. Loading a new `(module, entity)`
//! silently discards an unsaved draft; autosave and confirmation prompts are
//! caller concerns.

use std::sync::Arc;

use tracing::debug;

use powerdesk_fields::{
    ordering, EntityConfig, FieldDefinition, ModuleCatalog, StageDefinition,
};
use powerdesk_store::ConfigStore;

use crate::error::{Result, SessionError};
use crate::notify::ChangeNotifier;

/// What a `save()` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The draft was persisted and subscribers were notified.
    Saved,
    /// Nothing was dirty; the gateway was not called.
    NoChanges,
}

/// Editing session over one entity configuration.
pub struct ConfigSession {
    store: Arc<dyn ConfigStore>,
    notifier: ChangeNotifier,
    /// Computed by the hosting screen from the caller's role. The session
    /// performs no authentication of its own.
    can_edit: bool,
    selection: Option<(String, String)>,
    draft: Option<EntityConfig>,
    dirty: bool,
    busy: bool,
}

impl ConfigSession {
    pub fn new(store: Arc<dyn ConfigStore>, notifier: ChangeNotifier, can_edit: bool) -> Self {
        Self {
            store,
            notifier,
            can_edit,
            selection: None,
            draft: None,
            dirty: false,
            busy: false,
        }
    }

    /// Whether a load or save is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the draft diverged from the last persisted state.
    pub fn has_changes(&self) -> bool {
        self.dirty
    }

    pub fn can_edit(&self) -> bool {
        self.can_edit
    }

    /// The current draft, if a configuration is loaded.
    pub fn current(&self) -> Option<&EntityConfig> {
        self.draft.as_ref()
    }

    /// The selected `(module, entity)` key.
    pub fn selection(&self) -> Option<(&str, &str)> {
        self.selection
            .as_ref()
            .map(|(m, e)| (m.as_str(), e.as_str()))
    }

    /// The module directory, for populating selection UI.
    pub async fn modules(&self) -> Result<ModuleCatalog> {
        Ok(self.store.list_modules().await?)
    }

    /// Select and load a configuration. A missing key is not an error: it
    /// yields the canonical empty configuration. Any unsaved draft for the
    /// previous selection is discarded.
    pub async fn load(&mut self, module: &str, entity: &str) -> Result<&EntityConfig> {
        if self.busy {
            return Err(SessionError::Busy);
        }
        self.selection = Some((module.to_string(), entity.to_string()));
        self.draft = None;
        self.dirty = false;

        self.busy = true;
        let result = self.store.load_config(module, entity).await;
        self.busy = false;

        let config = match result {
            Ok(config) => config,
            Err(e) if e.is_not_found() => {
                debug!(module = %module, entity = %entity, "no stored config, starting empty");
                EntityConfig::empty(module, entity)
            }
            Err(e) => return Err(e.into()),
        };

        self.apply_loaded(module, entity, config);
        self.current().ok_or(SessionError::NoDraft)
    }

    /// Install a completed load if its key still matches the selection.
    /// A response for a superseded selection is discarded — the guard against
    /// a stale load overwriting a newer one. Returns whether it was applied.
    pub fn apply_loaded(&mut self, module: &str, entity: &str, config: EntityConfig) -> bool {
        match &self.selection {
            Some((m, e)) if m == module && e == entity => {
                self.draft = Some(config);
                self.dirty = false;
                true
            }
            _ => {
                debug!(module = %module, entity = %entity, "discarding stale load response");
                false
            }
        }
    }

    // =========================================================================
    // Mutation entry points
    // =========================================================================

    /// Replace the whole field list. Validates name uniqueness across every
    /// section and per-field invariants before accepting; a rejected list
    /// leaves the draft untouched.
    pub fn update_fields(&mut self, fields: Vec<FieldDefinition>) -> Result<()> {
        self.ensure_editable()?;
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;

        let mut candidate = draft.clone();
        candidate.fields = fields;
        candidate.validate()?;

        self.draft = Some(candidate);
        self.dirty = true;
        Ok(())
    }

    /// Replace the whole stage list. Validates stage-value uniqueness.
    pub fn update_stages(&mut self, stages: Vec<StageDefinition>) -> Result<()> {
        self.ensure_editable()?;
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;

        let mut candidate = draft.clone();
        candidate.kanban_stages = stages;
        candidate.validate()?;

        self.draft = Some(candidate);
        self.dirty = true;
        Ok(())
    }

    // =========================================================================
    // Field convenience operations (expressed via update_fields)
    // =========================================================================

    /// Add a new field at the end of its section.
    pub fn add_field(&mut self, mut field: FieldDefinition) -> Result<()> {
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;
        if draft.has_field(&field.field_name) {
            return Err(
                powerdesk_fields::SchemaError::duplicate_field(&field.field_name).into(),
            );
        }
        field.display_order = draft
            .fields
            .iter()
            .filter(|f| f.section == field.section)
            .count() as i64;

        let mut fields = draft.fields.clone();
        fields.push(field);
        self.update_fields(fields)
    }

    /// Update an existing field in place. The stored name is kept — names
    /// are immutable after creation.
    pub fn update_field(&mut self, field: FieldDefinition) -> Result<()> {
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;
        let mut fields = draft.fields.clone();
        let slot = fields
            .iter_mut()
            .find(|f| f.field_name == field.field_name)
            .ok_or_else(|| SessionError::unknown_field(&field.field_name))?;
        *slot = field;
        self.update_fields(fields)
    }

    /// Route an editor submission: update when the name exists, create
    /// otherwise.
    pub fn submit_field(&mut self, field: FieldDefinition) -> Result<()> {
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;
        if draft.has_field(&field.field_name) {
            self.update_field(field)
        } else {
            self.add_field(field)
        }
    }

    /// Remove a field and renumber its section.
    ///
    /// Irrecoverable once saved — there is no undo. Callers must put an
    /// explicit confirmation step in front of this.
    pub fn delete_field(&mut self, field_name: &str) -> Result<()> {
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;
        let section = draft
            .find_field(field_name)
            .ok_or_else(|| SessionError::unknown_field(field_name))?
            .section
            .clone();

        let mut fields = draft.fields.clone();
        fields.retain(|f| f.field_name != field_name);
        ordering::renumber_section(&mut fields, &section);
        self.update_fields(fields)
    }

    /// Move a field within its section. `from`/`to` index the section's
    /// subsequence.
    pub fn move_field(&mut self, section: &str, from: usize, to: usize) -> Result<()> {
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;
        let mut fields = draft.fields.clone();
        ordering::reorder_in_section(&mut fields, section, from, to)?;
        self.update_fields(fields)
    }

    /// Flip `show_in_list` across the draft so exactly `names` form the
    /// list view. Every name must exist.
    pub fn set_list_fields(&mut self, names: &[&str]) -> Result<()> {
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;
        for name in names {
            if !draft.has_field(name) {
                return Err(SessionError::unknown_field(*name));
            }
        }
        let mut fields = draft.fields.clone();
        for field in &mut fields {
            field.show_in_list = names.contains(&field.field_name.as_str());
        }
        self.update_fields(fields)
    }

    // =========================================================================
    // Stage convenience operations (expressed via update_stages)
    // =========================================================================

    /// Append a stage at the end of the workflow.
    pub fn add_stage(&mut self, stage: StageDefinition) -> Result<()> {
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;
        let mut stages = draft.kanban_stages.clone();
        stages.push(stage);
        ordering::renumber(&mut stages);
        self.update_stages(stages)
    }

    /// Update an existing stage in place, matched by value.
    pub fn update_stage(&mut self, stage: StageDefinition) -> Result<()> {
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;
        let mut stages = draft.kanban_stages.clone();
        let slot = stages
            .iter_mut()
            .find(|s| s.value == stage.value)
            .ok_or_else(|| SessionError::unknown_stage(&stage.value))?;
        *slot = stage;
        self.update_stages(stages)
    }

    /// Soft-delete a stage: excluded from transitions, retained for
    /// historical classification.
    pub fn deactivate_stage(&mut self, value: &str) -> Result<()> {
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;
        let mut stages = draft.kanban_stages.clone();
        let slot = stages
            .iter_mut()
            .find(|s| s.value == value)
            .ok_or_else(|| SessionError::unknown_stage(value))?;
        slot.is_active = false;
        self.update_stages(stages)
    }

    /// Move a stage. Stage ordering is global, not sectioned.
    pub fn move_stage(&mut self, from: usize, to: usize) -> Result<()> {
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;
        let mut stages = draft.kanban_stages.clone();
        ordering::reorder(&mut stages, from, to)?;
        self.update_stages(stages)
    }

    // =========================================================================
    // Save
    // =========================================================================

    /// Persist the draft. With no pending changes this returns
    /// [`SaveOutcome::NoChanges`] without touching the gateway. On success
    /// the dirty flag clears and subscribers for this key are notified; on
    /// failure the draft and dirty flag stay exactly as they were so the
    /// user can retry.
    pub async fn save(&mut self) -> Result<SaveOutcome> {
        if self.busy {
            return Err(SessionError::Busy);
        }
        if !self.dirty {
            return Ok(SaveOutcome::NoChanges);
        }
        let Some(draft) = self.draft.clone() else {
            return Err(SessionError::NoDraft);
        };

        self.busy = true;
        let result = self.store.save_config(&draft).await;
        self.busy = false;
        result?;

        self.dirty = false;
        debug!(module = %draft.module, entity = %draft.entity, "config saved");
        self.notifier.notify(&draft.module, &draft.entity);
        Ok(SaveOutcome::Saved)
    }

    fn ensure_editable(&self) -> Result<()> {
        if !self.can_edit {
            return Err(SessionError::ReadOnly);
        }
        if self.busy {
            return Err(SessionError::Busy);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerdesk_fields::{FieldEditor, FieldType, StageColor, StageDefinition};
    use powerdesk_store::{MemoryConfigStore, StoreError};

    fn session_with(store: Arc<MemoryConfigStore>) -> ConfigSession {
        ConfigSession::new(store, ChangeNotifier::new(), true)
    }

    fn text_field(name: &str, label: &str) -> FieldDefinition {
        FieldDefinition::new(name, label, FieldType::Text)
    }

    #[tokio::test]
    async fn load_missing_key_yields_empty_config() {
        // Scenario: nothing stored for (crm, leads)
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(Arc::clone(&store));

        let config = session.load("crm", "leads").await.unwrap();
        assert_eq!(config.module, "crm");
        assert_eq!(config.entity, "leads");
        assert_eq!(config.entity_label, "Leads");
        assert!(config.fields.is_empty());
        assert!(config.kanban_stages.is_empty());
        assert!(!session.has_changes());
    }

    #[tokio::test]
    async fn load_returns_stored_config() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut seeded = EntityConfig::empty("crm", "leads");
        seeded.fields.push(text_field("lead_name", "Lead Name"));
        store.seed(seeded);

        let mut session = session_with(store);
        let config = session.load("crm", "leads").await.unwrap();
        assert_eq!(config.fields.len(), 1);
    }

    #[tokio::test]
    async fn update_fields_sets_dirty_and_validates() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(store);
        session.load("crm", "leads").await.unwrap();

        session
            .update_fields(vec![text_field("lead_name", "Lead Name")])
            .unwrap();
        assert!(session.has_changes());

        // Duplicate names across sections are rejected and the draft is kept.
        let mut dup = text_field("lead_name", "Other");
        dup.section = "Details".into();
        let err = session
            .update_fields(vec![text_field("lead_name", "Lead Name"), dup])
            .unwrap_err();
        assert!(matches!(err, SessionError::Schema(_)));
        assert_eq!(session.current().unwrap().fields.len(), 1);
    }

    #[tokio::test]
    async fn add_field_assigns_section_relative_order() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(store);
        session.load("crm", "leads").await.unwrap();

        session.add_field(text_field("lead_name", "Lead Name")).unwrap();
        session.add_field(text_field("email", "Email")).unwrap();
        let mut financial = text_field("budget", "Budget");
        financial.section = "Financials".into();
        session.add_field(financial).unwrap();

        let config = session.current().unwrap();
        assert_eq!(config.find_field("lead_name").unwrap().display_order, 0);
        assert_eq!(config.find_field("email").unwrap().display_order, 1);
        assert_eq!(config.find_field("budget").unwrap().display_order, 0);
    }

    #[tokio::test]
    async fn add_field_rejects_duplicate_name() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(store);
        session.load("crm", "leads").await.unwrap();

        session.add_field(text_field("email", "Email")).unwrap();
        let err = session
            .add_field(text_field("email", "Email Again"))
            .unwrap_err();
        assert!(matches!(err, SessionError::Schema(_)));
    }

    #[tokio::test]
    async fn submit_field_routes_create_vs_update() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(store);
        session.load("crm", "leads").await.unwrap();

        // First submission creates.
        let mut editor = FieldEditor::create();
        editor
            .set_name("customer_type")
            .set_label("Customer Type")
            .set_field_type(FieldType::Select);
        editor.add_option("Retail");
        editor.add_option("Wholesale");
        session.submit_field(editor.submit().unwrap()).unwrap();
        assert_eq!(session.current().unwrap().fields.len(), 1);

        // Second submission with the same name updates in place.
        let existing = session
            .current()
            .unwrap()
            .find_field("customer_type")
            .unwrap()
            .clone();
        let mut editor = FieldEditor::edit(&existing);
        editor.set_label("Customer Segment");
        session.submit_field(editor.submit().unwrap()).unwrap();

        let config = session.current().unwrap();
        assert_eq!(config.fields.len(), 1);
        let field = config.find_field("customer_type").unwrap();
        assert_eq!(field.field_label, "Customer Segment");
        assert_eq!(field.options[0].value, "retail");
        assert_eq!(field.options[1].value, "wholesale");
    }

    #[tokio::test]
    async fn delete_field_renumbers_its_section() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(store);
        session.load("crm", "leads").await.unwrap();

        session.add_field(text_field("a", "A")).unwrap();
        session.add_field(text_field("b", "B")).unwrap();
        session.add_field(text_field("c", "C")).unwrap();

        session.delete_field("b").unwrap();
        let config = session.current().unwrap();
        assert!(config.find_field("b").is_none());
        assert_eq!(config.find_field("a").unwrap().display_order, 0);
        assert_eq!(config.find_field("c").unwrap().display_order, 1);

        let err = session.delete_field("missing").unwrap_err();
        assert!(matches!(err, SessionError::UnknownField { .. }));
    }

    #[tokio::test]
    async fn move_stage_matches_workflow_reorder() {
        // [New(0), Contacted(1), Qualified(2)], move 2 → 0
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(store);
        session.load("crm", "leads").await.unwrap();

        for (i, label) in ["New", "Contacted", "Qualified"].iter().enumerate() {
            session
                .add_stage(StageDefinition::new(*label, StageColor::Blue, i as i64))
                .unwrap();
        }
        session.move_stage(2, 0).unwrap();

        let stages: Vec<(String, i64)> = session
            .current()
            .unwrap()
            .kanban_stages
            .iter()
            .map(|s| (s.value.clone(), s.order))
            .collect();
        assert_eq!(
            stages,
            vec![
                ("qualified".to_string(), 0),
                ("new".to_string(), 1),
                ("contacted".to_string(), 2)
            ]
        );
    }

    #[tokio::test]
    async fn deactivate_stage_is_soft_delete() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(store);
        session.load("crm", "leads").await.unwrap();

        session
            .add_stage(StageDefinition::new("New", StageColor::Blue, 0))
            .unwrap();
        session
            .add_stage(StageDefinition::new("Lost", StageColor::Red, 1))
            .unwrap();
        session.deactivate_stage("lost").unwrap();

        let config = session.current().unwrap();
        assert_eq!(config.kanban_stages.len(), 2);
        assert_eq!(config.active_stages().len(), 1);
    }

    #[tokio::test]
    async fn set_list_fields_flips_flags() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(store);
        session.load("inventory", "items").await.unwrap();

        session.add_field(text_field("item_code", "Item Code")).unwrap();
        session.add_field(text_field("item_name", "Item Name")).unwrap();
        session.add_field(text_field("notes", "Notes")).unwrap();

        session.set_list_fields(&["item_code", "item_name"]).unwrap();
        let config = session.current().unwrap();
        assert_eq!(config.list_display_fields().len(), 2);
        assert!(!config.find_field("notes").unwrap().show_in_list);

        let err = session.set_list_fields(&["missing"]).unwrap_err();
        assert!(matches!(err, SessionError::UnknownField { .. }));
    }

    #[tokio::test]
    async fn save_without_changes_skips_the_gateway() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(Arc::clone(&store));
        session.load("crm", "leads").await.unwrap();

        let outcome = session.save().await.unwrap();
        assert_eq!(outcome, SaveOutcome::NoChanges);
        assert_eq!(store.save_calls(), 0);
    }

    #[tokio::test]
    async fn save_persists_and_clears_dirty() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(Arc::clone(&store));
        session.load("crm", "leads").await.unwrap();
        session.add_field(text_field("lead_name", "Lead Name")).unwrap();

        let outcome = session.save().await.unwrap();
        assert_eq!(outcome, SaveOutcome::Saved);
        assert!(!session.has_changes());
        assert_eq!(store.stored("crm", "leads").unwrap().fields.len(), 1);
    }

    #[tokio::test]
    async fn failed_save_preserves_draft_and_dirty() {
        // Transport failure: draft and dirty flag must survive for a retry.
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(Arc::clone(&store));
        session.load("crm", "leads").await.unwrap();
        session.add_field(text_field("lead_name", "Lead Name")).unwrap();
        let before = session.current().unwrap().clone();

        store.fail_next_save(StoreError::transport("gateway offline"));
        let err = session.save().await.unwrap_err();
        assert!(matches!(err, SessionError::Store(StoreError::Transport { .. })));
        assert!(session.has_changes());
        assert_eq!(session.current().unwrap(), &before);
        assert!(store.stored("crm", "leads").is_none());

        // User-initiated retry succeeds without re-entering anything.
        assert_eq!(session.save().await.unwrap(), SaveOutcome::Saved);
        assert!(store.stored("crm", "leads").is_some());
    }

    #[tokio::test]
    async fn save_notifies_exactly_the_changed_key() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let store = Arc::new(MemoryConfigStore::new());
        let notifier = ChangeNotifier::new();

        let item_hits = Arc::new(AtomicUsize::new(0));
        let employee_hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&item_hits);
        let _a = notifier.subscribe_to("inventory", "items", move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&employee_hits);
        let _b = notifier.subscribe_to("hrms", "employees", move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut session = ConfigSession::new(store, notifier, true);
        session.load("inventory", "items").await.unwrap();
        session.add_field(text_field("item_code", "Item Code")).unwrap();
        session.save().await.unwrap();

        assert_eq!(item_hits.load(Ordering::SeqCst), 1);
        assert_eq!(employee_hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn no_notification_on_failed_save() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let store = Arc::new(MemoryConfigStore::new());
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let _sub = notifier.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut session = ConfigSession::new(Arc::clone(&store) as Arc<dyn ConfigStore>, notifier, true);
        session.load("crm", "leads").await.unwrap();
        session.add_field(text_field("lead_name", "Lead Name")).unwrap();

        store.fail_next_save(StoreError::transport("gateway offline"));
        assert!(session.save().await.is_err());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn switching_selection_discards_unsaved_draft() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(Arc::clone(&store));

        session.load("crm", "leads").await.unwrap();
        session.add_field(text_field("lead_name", "Lead Name")).unwrap();
        assert!(session.has_changes());

        session.load("hrms", "employees").await.unwrap();
        assert!(!session.has_changes());
        assert_eq!(session.current().unwrap().entity, "employees");
        assert!(store.stored("crm", "leads").is_none());
    }

    #[tokio::test]
    async fn stale_load_response_is_discarded() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(store);

        session.load("crm", "leads").await.unwrap();
        // A response for a selection that is no longer current must not land.
        let stale = EntityConfig::empty("inventory", "items");
        assert!(!session.apply_loaded("inventory", "items", stale));
        assert_eq!(session.current().unwrap().entity, "leads");
    }

    #[tokio::test]
    async fn read_only_session_refuses_mutation() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut session =
            ConfigSession::new(store as Arc<dyn ConfigStore>, ChangeNotifier::new(), false);
        session.load("crm", "leads").await.unwrap();

        let err = session
            .update_fields(vec![text_field("lead_name", "Lead Name")])
            .unwrap_err();
        assert!(matches!(err, SessionError::ReadOnly));
        assert!(!session.has_changes());
    }

    #[tokio::test]
    async fn mutation_before_load_is_refused() {
        let store = Arc::new(MemoryConfigStore::new());
        let mut session = session_with(store);
        let err = session.update_fields(vec![]).unwrap_err();
        assert!(matches!(err, SessionError::NoDraft));
    }

    #[tokio::test]
    async fn load_then_save_does_not_rewrite() {
        // Round-trip: no mutation between load and save ⇒ no gateway write.
        let store = Arc::new(MemoryConfigStore::new());
        let mut seeded = EntityConfig::empty("accounts", "invoices");
        seeded.fields.push(text_field("invoice_no", "Invoice No"));
        store.seed(seeded.clone());

        let mut session = session_with(Arc::clone(&store));
        session.load("accounts", "invoices").await.unwrap();
        assert_eq!(session.save().await.unwrap(), SaveOutcome::NoChanges);
        assert_eq!(store.stored("accounts", "invoices").unwrap(), seeded);
        assert_eq!(store.save_calls(), 0);
    }
}
