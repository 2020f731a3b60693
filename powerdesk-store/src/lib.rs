//! Persistence gateway for PowerDesk entity configurations
//!
//! The registry core talks to storage through the [`ConfigStore`] trait:
//! load and save one [`EntityConfig`](powerdesk_fields::EntityConfig) by
//! `(module, entity)` key, and list the module directory. Two
//! implementations ship here:
//!
//! - [`FileConfigStore`] — one YAML file per entity configuration under a
//!   root directory, atomic temp-file-then-rename writes
//! - [`MemoryConfigStore`] — HashMap-backed, with call counters and failure
//!   injection for session tests
//!
//! A not-found load is a declared branch of the contract, not an exception:
//! the configuration session answers it with the canonical empty config.

pub mod defaults;
mod error;
mod file;
mod gateway;
mod memory;

pub use defaults::default_catalog;
pub use error::{Result, StoreError};
pub use file::FileConfigStore;
pub use gateway::ConfigStore;
pub use memory::MemoryConfigStore;
