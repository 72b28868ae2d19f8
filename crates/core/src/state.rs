//! Application state and the pure update function.
//!
//! Shells own a [`PantryState`], feed user actions through [`update`] and then
//! persist whatever the action [touched](Action::touches). Nothing in here
//! performs I/O.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::recipes;
use crate::settings::Settings;
use crate::types::{ItemId, PantryItem, SignedInUser};

/// Everything the tracker persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryState {
    /// Inventory in insertion order.
    pub inventory: Vec<PantryItem>,
    pub user: Option<SignedInUser>,
}

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a new item to the inventory.
    AddItem(PantryItem),
    /// Use up one step of an item.
    UseItem(ItemId),
    /// Remove an item.
    DeleteItem(ItemId),
    /// Cook a catalog recipe by name.
    Cook(String),
    SignIn(SignedInUser),
    SignOut,
}

/// Which persisted slots an action rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Touched {
    pub inventory: bool,
    pub user: bool,
}

impl Action {
    /// Persisted slots this action rewrites.
    #[must_use]
    pub const fn touches(&self) -> Touched {
        match self {
            Self::AddItem(_) | Self::UseItem(_) | Self::DeleteItem(_) | Self::Cook(_) => Touched {
                inventory: true,
                user: false,
            },
            Self::SignIn(_) | Self::SignOut => Touched {
                inventory: false,
                user: true,
            },
        }
    }
}

impl PantryState {
    /// Look up an item by identifier.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&PantryItem> {
        self.inventory.iter().find(|item| item.id == id)
    }
}

/// Apply an action and return the new state.
///
/// Unknown item ids and recipes that cannot be cooked leave the state as it
/// was.
#[must_use]
pub fn update(mut state: PantryState, action: Action, catalog: &Catalog, settings: &Settings) -> PantryState {
    match action {
        Action::AddItem(item) => state.inventory.push(item),
        Action::UseItem(id) => {
            if let Some(item) = state.inventory.iter_mut().find(|item| item.id == id) {
                item.consume(settings.use_step);
            }
        }
        Action::DeleteItem(id) => state.inventory.retain(|item| item.id != id),
        Action::Cook(name) => {
            if let Some(recipe) = catalog.recipe(&name)
                && !recipes::cook(&mut state.inventory, recipe, settings.use_step)
            {
                tracing::debug!(recipe = %recipe.name, "Recipe not cookable, nothing consumed");
            }
        }
        Action::SignIn(user) => state.user = Some(user),
        Action::SignOut => state.user = None,
    }
    state
}
