//! Squad Core — roster, filtering, squad selection and its persistence.
//!
//! This crate contains everything a front-end needs to build a squad:
//! - Domain types (players, ids, attributes)
//! - Roster store loaded once from a JSON document (file or URL)
//! - Filter engine over the roster (name search + exact-match dropdowns)
//! - Selection manager with duplicate/capacity invariants and write-through
//!   persistence to an injected key-value store
//! - View-models for search results, detail panels and team cards
//! - TOML configuration

pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod roster;
pub mod selection;
pub mod storage;
pub mod view;

pub use config::AppConfig;
pub use domain::{Attribute, Player, PlayerId, RosterField};
pub use error::{ConfigError, LoadError, SelectionError, StorageError};
pub use filter::Criteria;
pub use roster::{RosterSource, RosterStore};
pub use selection::{Confirmation, SelectionManager, SELECTION_KEY, SQUAD_CAPACITY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

#[cfg(test)]
pub(crate) mod test_helpers;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: roster data can be handed from the loader thread
    /// to the UI thread.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Player>();
        require_sync::<Player>();
        require_send::<RosterStore>();
        require_sync::<RosterStore>();
        require_send::<LoadError>();
    }
}
