//! Persistence of [`PantryState`] against a key-value store.
//!
//! The inventory and the signed-in user are two independent JSON values under
//! [`INVENTORY_KEY`] and [`USER_KEY`]. There is no schema versioning: a value
//! that fails to parse is logged and replaced by the empty default.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::{PantryState, Touched};
use crate::types::SignedInUser;

/// Key holding the inventory list.
pub const INVENTORY_KEY: &str = "pantry_inventory";

/// Key holding the signed-in user record.
pub const USER_KEY: &str = "pantry_user";

/// Errors reading or writing the store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded.
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The key is not usable by this store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// String key-value storage, the shape of browser local storage.
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing medium fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing medium fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing medium fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}

/// Load the persisted state.
///
/// Never fails: unreadable or malformed values are logged and replaced by
/// their empty default, each slot independently.
pub fn load_state(store: &dyn KeyValueStore) -> PantryState {
    PantryState {
        inventory: load_slot(store, INVENTORY_KEY).unwrap_or_default(),
        user: load_slot::<Option<SignedInUser>>(store, USER_KEY).flatten(),
    }
}

fn load_slot<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read persisted state, using default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Malformed persisted state, using default");
            None
        }
    }
}

/// Rewrite the slots an action touched.
///
/// A signed-out user removes the user key rather than storing `null`.
///
/// # Errors
///
/// Returns [`StorageError`] if encoding or writing fails.
pub fn save_state(
    store: &dyn KeyValueStore,
    state: &PantryState,
    touched: Touched,
) -> Result<(), StorageError> {
    if touched.inventory {
        store.set(INVENTORY_KEY, &encode(INVENTORY_KEY, &state.inventory)?)?;
    }

    if touched.user {
        match &state.user {
            Some(user) => store.set(USER_KEY, &encode(USER_KEY, user)?)?,
            None => store.remove(USER_KEY)?,
        }
    }

    Ok(())
}

/// Rewrite both slots.
///
/// # Errors
///
/// Returns [`StorageError`] if encoding or writing fails.
pub fn save_all(store: &dyn KeyValueStore, state: &PantryState) -> Result<(), StorageError> {
    save_state(
        store,
        state,
        Touched {
            inventory: true,
            user: true,
        },
    )
}

fn encode<T: Serialize>(key: &'static str, value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|source| StorageError::Encode { key, source })
}
