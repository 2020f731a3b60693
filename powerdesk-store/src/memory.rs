//! In-memory configuration store.
//!
//! Backs session tests and embedded use where nothing should touch disk.
//! Counts gateway calls and can fail the next save on demand, which is what
//! the save-failure and no-op-save contracts are asserted against.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use powerdesk_fields::{EntityConfig, ModuleCatalog};

use crate::defaults::default_catalog;
use crate::error::{Result, StoreError};
use crate::gateway::ConfigStore;

/// HashMap-backed store with call counters and save-failure injection.
pub struct MemoryConfigStore {
    configs: Mutex<HashMap<(String, String), EntityConfig>>,
    catalog: ModuleCatalog,
    load_calls: AtomicUsize,
    save_calls: AtomicUsize,
    fail_next_save: Mutex<Option<StoreError>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self {
            configs: Mutex::new(HashMap::new()),
            catalog: default_catalog(),
            load_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
            fail_next_save: Mutex::new(None),
        }
    }

    /// Replace the module directory.
    pub fn with_catalog(mut self, catalog: ModuleCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Pre-populate a configuration.
    pub fn seed(&self, config: EntityConfig) {
        let key = (config.module.clone(), config.entity.clone());
        self.configs.lock().unwrap().insert(key, config);
    }

    /// Make the next `save_config` fail with this error.
    pub fn fail_next_save(&self, err: StoreError) {
        *self.fail_next_save.lock().unwrap() = Some(err);
    }

    /// Number of `load_config` calls seen.
    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }

    /// Number of `save_config` calls seen, including failed ones.
    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// The stored configuration for a key, if any.
    pub fn stored(&self, module: &str, entity: &str) -> Option<EntityConfig> {
        self.configs
            .lock()
            .unwrap()
            .get(&(module.to_string(), entity.to_string()))
            .cloned()
    }
}

impl Default for MemoryConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn load_config(&self, module: &str, entity: &str) -> Result<EntityConfig> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        self.configs
            .lock()
            .unwrap()
            .get(&(module.to_string(), entity.to_string()))
            .cloned()
            .ok_or_else(|| StoreError::not_found(module, entity))
    }

    async fn save_config(&self, config: &EntityConfig) -> Result<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_next_save.lock().unwrap().take() {
            return Err(err);
        }
        config.validate()?;
        let key = (config.module.clone(), config.entity.clone());
        self.configs.lock().unwrap().insert(key, config.clone());
        Ok(())
    }

    async fn list_modules(&self) -> Result<ModuleCatalog> {
        Ok(self.catalog.clone())
    }
}
