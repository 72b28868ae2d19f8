//! Pantry items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::id::ItemId;

/// A tracked unit of food.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryItem {
    /// Unique within the inventory list.
    pub id: ItemId,
    /// Display name, also used to match recipe ingredients and prices.
    pub name: String,
    /// Non-negative by convention; not enforced.
    pub quantity: i64,
    /// Expiration date, if the item has one.
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,
    /// Barcode value captured when the item was added.
    #[serde(default)]
    pub barcode: Option<String>,
    /// Regularly stocked items are suggested for restock once depleted.
    #[serde(default)]
    pub regular: bool,
}

impl PantryItem {
    /// Case-insensitive name comparison used for ingredient lookup.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Whether any of the item is left.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Decrement the quantity by `step`, never going below zero.
    ///
    /// Items already at or below zero are left untouched.
    pub fn consume(&mut self, step: u32) {
        if self.quantity > 0 {
            self.quantity = self.quantity.saturating_sub(i64::from(step)).max(0);
        }
    }
}

/// Errors rejecting user input for a new item.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NewItemError {
    /// Name is blank after trimming.
    #[error("item name cannot be empty")]
    EmptyName,
}

/// User-entered fields of the add-item form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub expires_on: Option<NaiveDate>,
    pub barcode: Option<String>,
    pub regular: bool,
}

impl NewItem {
    /// Turn the form input into an item with the given identifier.
    ///
    /// The name is trimmed and a blank barcode is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`NewItemError::EmptyName`] if the name is blank.
    pub fn into_item(self, id: ItemId) -> Result<PantryItem, NewItemError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(NewItemError::EmptyName);
        }

        Ok(PantryItem {
            id,
            name: name.to_owned(),
            quantity: self.quantity,
            expires_on: self.expires_on,
            barcode: self
                .barcode
                .map(|code| code.trim().to_owned())
                .filter(|code| !code.is_empty()),
            regular: self.regular,
        })
    }
}
