//! Pantry commands.
//!
//! Each command opens the pantry, runs to completion against the store and
//! returns the lines to report.

pub mod account;
pub mod inventory;
pub mod recipes;
pub mod reminders;

use pantry_core::identity::IdentityError;
use pantry_core::storage::{self, KeyValueStore, StorageError};
use pantry_core::{Action, Catalog, ItemId, NewItemError, PantryState, Settings, update};
use pantry_web::config::ConfigError;
use pantry_web::store::CatalogLoadError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog override could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),

    /// Reading or writing the data directory failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// New item was rejected.
    #[error("Invalid item: {0}")]
    InvalidItem(#[from] NewItemError),

    /// `add` was given neither a name nor `--scan`.
    #[error("An item name is required unless --scan is given")]
    MissingName,

    /// Scanning ended without a code.
    #[error("{0}")]
    Scan(String),

    /// Credential could not be decoded.
    #[error("Sign-in failed: {0}")]
    Identity(#[from] IdentityError),

    /// No item has the given id.
    #[error("No item with id {0}")]
    UnknownItem(ItemId),

    /// No recipe has the given name.
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),
}

/// An opened pantry: persisted state plus the reference data it is read with.
pub struct Pantry {
    store: Box<dyn KeyValueStore>,
    catalog: Catalog,
    settings: Settings,
    state: PantryState,
}

impl Pantry {
    /// Load the persisted state from `store`.
    #[must_use]
    pub fn open(store: Box<dyn KeyValueStore>, catalog: Catalog, settings: Settings) -> Self {
        let state = storage::load_state(store.as_ref());
        tracing::debug!(items = state.inventory.len(), "Loaded pantry");
        Self {
            store,
            catalog,
            settings,
            state,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &PantryState {
        &self.state
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply an action and persist what it touched.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Storage` if the new state cannot be written.
    pub fn dispatch(&mut self, action: Action) -> Result<(), CommandError> {
        let touched = action.touches();
        let current = std::mem::take(&mut self.state);
        self.state = update(current, action, &self.catalog, &self.settings);
        storage::save_state(self.store.as_ref(), &self.state, touched)?;
        Ok(())
    }

    fn require_item(&self, id: ItemId) -> Result<&pantry_core::PantryItem, CommandError> {
        self.state.item(id).ok_or(CommandError::UnknownItem(id))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use pantry_core::storage::MemoryStore;

    use super::*;

    pub fn pantry() -> Pantry {
        Pantry::open(Box::new(MemoryStore::new()), Catalog::builtin(), Settings::default())
    }
}
