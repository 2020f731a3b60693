//! Configuration schema models for the PowerDesk registry
//!
//! `powerdesk-fields` is a standalone, schema-only crate: field and stage
//! definitions, the per-entity configuration aggregate, the module catalog,
//! and the pure editing/reordering algorithms over them. It performs no I/O
//! and knows nothing about persistence or change propagation — those live in
//! `powerdesk-store` and `powerdesk-registry`.
//!
//! # Architecture
//!
//! - **Schema-only**: owns field/stage definitions, not business record values
//! - **Closed type enumeration**: `FieldType` maps exhaustively to widget and
//!   value shape, so a new type is a compile-time-checked match update
//! - **Dense ordering**: reordering renumbers to `0..N-1` after every move;
//!   consumers sort, they never index

pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod ordering;
pub mod slug;
pub mod types;

pub use catalog::{ModuleCatalog, ModuleEntry};
pub use config::EntityConfig;
pub use editor::{FieldEditor, StageEditor};
pub use error::{Result, SchemaError};
pub use ordering::{renumber, renumber_section, reorder, reorder_in_section, Ordered};
pub use slug::{normalize_field_name, slugify, title_case};
pub use types::{
    FieldDefinition, FieldOption, FieldType, StageColor, StageDefinition, ValueShape, Widget,
};
