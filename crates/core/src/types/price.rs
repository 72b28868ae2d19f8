//! Store prices for pantry staples, using decimal arithmetic.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One store's price for an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Store name, shown to the user as-is.
    pub store: String,
    /// Price in the store's currency unit.
    pub price: Decimal,
}

impl PriceEntry {
    /// Create a new price entry.
    #[must_use]
    pub fn new(store: impl Into<String>, price: Decimal) -> Self {
        Self {
            store: store.into(),
            price,
        }
    }
}

impl fmt::Display for PriceEntry {
    /// Formats as `Store ($1.40)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${:.2})", self.store, self.price)
    }
}

/// Static price reference data keyed by lowercase item name.
///
/// Keys are lowercased on construction so lookups can lowercase the query and
/// match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<PriceEntry>>")]
pub struct PriceTable {
    entries: BTreeMap<String, Vec<PriceEntry>>,
}

impl PriceTable {
    /// Build a table from `(item name, entries)` pairs.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<PriceEntry>)>,
        K: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, list)| (name.as_ref().to_lowercase(), list))
                .collect(),
        }
    }

    /// Price entries for an item, if the table knows it.
    #[must_use]
    pub fn entries_for(&self, item_name: &str) -> Option<&[PriceEntry]> {
        self.entries
            .get(&item_name.to_lowercase())
            .map(Vec::as_slice)
    }

    /// Cheapest store for an item.
    ///
    /// Returns `None` when the item is unknown or has no entries. Ties go to
    /// the entry listed first.
    #[must_use]
    pub fn cheapest(&self, item_name: &str) -> Option<&PriceEntry> {
        cheapest_entry(self.entries_for(item_name)?)
    }

    /// Number of items with price data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, Vec<PriceEntry>>> for PriceTable {
    fn from(entries: BTreeMap<String, Vec<PriceEntry>>) -> Self {
        Self::from_entries(entries)
    }
}

/// Linear minimum scan; strict comparison keeps the first of equal prices.
#[must_use]
pub fn cheapest_entry(entries: &[PriceEntry]) -> Option<&PriceEntry> {
    entries.iter().fold(None, |best, entry| match best {
        Some(current) if current.price <= entry.price => Some(current),
        _ => Some(entry),
    })
}
