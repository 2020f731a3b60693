//! The ConfigStore trait — the registry's persistence gateway.

use async_trait::async_trait;
use powerdesk_fields::{EntityConfig, ModuleCatalog};

use crate::error::Result;

/// Load/save entity configurations by `(module, entity)` key and expose the
/// module directory.
///
/// `load_config` fails with [`StoreError::NotFound`](crate::StoreError) when
/// no configuration exists; that branch is part of the contract — the
/// configuration session answers it with `EntityConfig::empty`, never with a
/// user-facing error.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the configuration for a key.
    async fn load_config(&self, module: &str, entity: &str) -> Result<EntityConfig>;

    /// Persist a full configuration. Implementations reject configurations
    /// that fail shape validation.
    async fn save_config(&self, config: &EntityConfig) -> Result<()>;

    /// The module/entity directory.
    async fn list_modules(&self) -> Result<ModuleCatalog>;
}
