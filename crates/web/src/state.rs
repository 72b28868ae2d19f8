//! Application state shared across handlers.

use std::sync::Arc;

use chrono::NaiveDate;
use pantry_core::identity::IdentityProvider;
use pantry_core::scanner::ScanSession;
use pantry_core::storage::{self, KeyValueStore};
use pantry_core::{Action, Catalog, PantryState, Settings, update};
use tokio::sync::{Mutex, MutexGuard};

use crate::error::Result;

/// Everything one pantry page shows that is not reference data.
#[derive(Debug, Default)]
pub struct Session {
    /// Persisted state.
    pub pantry: PantryState,
    /// Scanning panel.
    pub scan: ScanSession,
    /// Name pre-filled into the add-item form after a scan.
    pub draft_name: Option<String>,
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The pantry has a single
/// logical user, so all mutable state sits behind one async mutex.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Catalog,
    settings: Settings,
    identity: Option<Arc<dyn IdentityProvider>>,
    store: Arc<dyn KeyValueStore>,
    session: Mutex<Session>,
}

impl AppState {
    /// Create the application state, loading persisted values from `store`.
    ///
    /// Malformed persisted values are logged and replaced by empty defaults.
    #[must_use]
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        catalog: Catalog,
        settings: Settings,
        identity: Option<Arc<dyn IdentityProvider>>,
    ) -> Self {
        let pantry = storage::load_state(store.as_ref());
        tracing::info!(
            items = pantry.inventory.len(),
            signed_in = pantry.user.is_some(),
            "Loaded pantry"
        );

        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                settings,
                identity,
                store,
                session: Mutex::new(Session {
                    pantry,
                    ..Session::default()
                }),
            }),
        }
    }

    /// Get a reference to the recipe and price catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get the reminder and consumption thresholds.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    /// Get the identity provider, if sign-in is configured.
    #[must_use]
    pub fn identity(&self) -> Option<&dyn IdentityProvider> {
        self.inner.identity.as_deref()
    }

    /// Lock the session for reading or for non-persisted changes.
    pub async fn session(&self) -> MutexGuard<'_, Session> {
        self.inner.session.lock().await
    }

    /// Apply a user action and persist what it touched.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the new state cannot be written. The
    /// in-memory state keeps the update either way.
    pub async fn dispatch(&self, action: Action) -> Result<()> {
        let mut session = self.session().await;
        self.apply(&mut session, action)
    }

    /// Apply an action to an already locked session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the new state cannot be written.
    pub fn apply(&self, session: &mut Session, action: Action) -> Result<()> {
        let touched = action.touches();
        let current = std::mem::take(&mut session.pantry);
        session.pantry = update(current, action, &self.inner.catalog, &self.inner.settings);
        storage::save_state(self.inner.store.as_ref(), &session.pantry, touched)?;
        Ok(())
    }
}

/// Today's date in UTC, the reference point for expiry reminders.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
