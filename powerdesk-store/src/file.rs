//! File-backed configuration store.
//!
//! Owns a directory on disk with the structure:
//! ```text
//! powerdesk/
//!   modules.yaml           ← optional module directory override
//!   configs/
//!     <module>/
//!       <entity>.yaml      ← one file per entity configuration
//! ```
//!
//! Files are human-readable YAML so an ops checkout stays git-diffable.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use ulid::Ulid;

use powerdesk_fields::{EntityConfig, ModuleCatalog};

use crate::defaults::default_catalog;
use crate::error::{Result, StoreError};
use crate::gateway::ConfigStore;

/// Configuration store over a local directory.
pub struct FileConfigStore {
    root: PathBuf,
}

impl FileConfigStore {
    /// Create a store rooted at a directory. Directories are created on
    /// first save; a fresh root behaves as an empty store.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self, module: &str, entity: &str) -> PathBuf {
        self.root
            .join("configs")
            .join(module)
            .join(format!("{entity}.yaml"))
    }

    fn catalog_path(&self) -> PathBuf {
        self.root.join("modules.yaml")
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    async fn load_config(&self, module: &str, entity: &str) -> Result<EntityConfig> {
        let path = self.config_path(module, entity);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::not_found(module, entity));
            }
            Err(e) => return Err(e.into()),
        };
        let config: EntityConfig = serde_yaml::from_str(&content)?;
        debug!(module = %module, entity = %entity, fields = config.fields.len(), "loaded config");
        Ok(config)
    }

    async fn save_config(&self, config: &EntityConfig) -> Result<()> {
        if config.module.trim().is_empty() || config.entity.trim().is_empty() {
            return Err(StoreError::validation("module and entity keys are required"));
        }
        config.validate()?;

        let yaml = serde_yaml::to_string(config)?;
        let path = self.config_path(&config.module, &config.entity);
        atomic_write(&path, yaml.as_bytes()).await?;
        debug!(module = %config.module, entity = %config.entity, "saved config");
        Ok(())
    }

    async fn list_modules(&self) -> Result<ModuleCatalog> {
        let path = self.catalog_path();
        match fs::read_to_string(&path).await {
            Ok(content) => {
                let catalog: ModuleCatalog = serde_yaml::from_str(&content)?;
                debug!(modules = catalog.len(), "loaded module directory override");
                Ok(catalog)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(default_catalog()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Write to a temp file then rename for atomic persistence.
async fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "no parent dir"))?;
    fs::create_dir_all(dir).await?;
    let tmp = dir.join(format!(".tmp_{}", Ulid::new()));
    fs::write(&tmp, data).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerdesk_fields::{FieldDefinition, FieldType, StageColor, StageDefinition};
    use tempfile::TempDir;

    fn sample_config() -> EntityConfig {
        let mut config = EntityConfig::empty("crm", "leads");
        let mut name = FieldDefinition::new("lead_name", "Lead Name", FieldType::Text);
        name.is_required = true;
        name.show_in_list = true;
        config.fields.push(name);
        config
            .kanban_stages
            .push(StageDefinition::new("New", StageColor::Blue, 0));
        config
    }

    #[tokio::test]
    async fn load_missing_key_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let store = FileConfigStore::new(tmp.path());

        let err = store.load_config("crm", "leads").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = FileConfigStore::new(tmp.path());

        let config = sample_config();
        store.save_config(&config).await.unwrap();

        let loaded = store.load_config("crm", "leads").await.unwrap();
        assert_eq!(loaded, config);
        assert!(tmp.path().join("configs/crm/leads.yaml").exists());
    }

    #[tokio::test]
    async fn save_overwrites_previous_config() {
        let tmp = TempDir::new().unwrap();
        let store = FileConfigStore::new(tmp.path());

        let mut config = sample_config();
        store.save_config(&config).await.unwrap();

        config
            .fields
            .push(FieldDefinition::new("email", "Email", FieldType::Email));
        store.save_config(&config).await.unwrap();

        let loaded = store.load_config("crm", "leads").await.unwrap();
        assert_eq!(loaded.fields.len(), 2);
    }

    #[tokio::test]
    async fn save_rejects_invalid_config() {
        let tmp = TempDir::new().unwrap();
        let store = FileConfigStore::new(tmp.path());

        let mut config = sample_config();
        config
            .fields
            .push(FieldDefinition::new("lead_name", "Duplicate", FieldType::Text));

        let err = store.save_config(&config).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
        // Nothing was written
        assert!(store.load_config("crm", "leads").await.is_err());
    }

    #[tokio::test]
    async fn save_rejects_blank_key() {
        let tmp = TempDir::new().unwrap();
        let store = FileConfigStore::new(tmp.path());

        let config = EntityConfig::empty("", "leads");
        let err = store.save_config(&config).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[tokio::test]
    async fn persistence_survives_reopen() {
        let tmp = TempDir::new().unwrap();
        {
            let store = FileConfigStore::new(tmp.path());
            store.save_config(&sample_config()).await.unwrap();
        }
        let store = FileConfigStore::new(tmp.path());
        let loaded = store.load_config("crm", "leads").await.unwrap();
        assert_eq!(loaded.fields.len(), 1);
        assert_eq!(loaded.kanban_stages.len(), 1);
    }

    #[tokio::test]
    async fn list_modules_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let store = FileConfigStore::new(tmp.path());

        let catalog = store.list_modules().await.unwrap();
        assert!(catalog.contains("crm", "leads"));
        assert!(catalog.contains("inventory", "items"));
    }

    #[tokio::test]
    async fn modules_yaml_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let custom = ModuleCatalog::new()
            .module("fleet", "Fleet")
            .entity("fleet", "vehicles", "Vehicles");
        std::fs::write(
            tmp.path().join("modules.yaml"),
            serde_yaml::to_string(&custom).unwrap(),
        )
        .unwrap();

        let store = FileConfigStore::new(tmp.path());
        let catalog = store.list_modules().await.unwrap();
        assert!(catalog.contains("fleet", "vehicles"));
        assert!(!catalog.contains("crm", "leads"));
    }

    #[tokio::test]
    async fn no_temp_files_left_behind() {
        let tmp = TempDir::new().unwrap();
        let store = FileConfigStore::new(tmp.path());
        store.save_config(&sample_config()).await.unwrap();

        let dir = tmp.path().join("configs/crm");
        let leftovers: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(".tmp_"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
