//! Configuration session and change propagation for PowerDesk
//!
//! This crate is the mutable heart of the field registry:
//!
//! - [`ConfigSession`] holds the in-memory draft of one entity
//!   configuration, tracks dirty state, applies field/stage mutations, and
//!   persists through a [`ConfigStore`](powerdesk_store::ConfigStore)
//! - [`ChangeNotifier`] fans "this `(module, entity)` changed" out to every
//!   subscribed consumer after each successful save, so forms, list views
//!   and kanban boards refresh without knowing about each other
//!
//! One process typically builds one notifier, clones the handle into each
//! session and each consuming screen, and lets subscriptions drop with the
//! screens that own them.

mod error;
mod notify;
mod session;

pub use error::{Result, SessionError};
pub use notify::{ChangeNotifier, Subscription};
pub use session::{ConfigSession, SaveOutcome};
