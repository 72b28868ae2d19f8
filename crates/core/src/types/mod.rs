//! Core types for the pantry tracker.
//!
//! This module provides the data model: items, recipes, prices and the
//! signed-in user.

pub mod id;
pub mod item;
pub mod price;
pub mod recipe;
pub mod user;

pub use id::ItemId;
pub use item::{NewItem, NewItemError, PantryItem};
pub use price::{PriceEntry, PriceTable, cheapest_entry};
pub use recipe::Recipe;
pub use user::{Email, EmailError, SignedInUser};
