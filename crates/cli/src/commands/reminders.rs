//! Expiry and restock reminders.

use chrono::NaiveDate;
use pantry_core::reminders::{expiring_soon, needs_restock};

use super::Pantry;

/// Report soon-to-expire items and regular items that ran out.
#[must_use]
pub fn reminders(pantry: &Pantry, today: NaiveDate) -> Vec<String> {
    let inventory = &pantry.state().inventory;
    let window = pantry.settings().expiry_window_days;
    let mut lines = Vec::new();

    let expiring = expiring_soon(inventory, today, window);
    if expiring.is_empty() {
        lines.push(format!("Nothing expires within {window} days."));
    } else {
        lines.push(format!("Expiring within {window} days:"));
        lines.extend(
            expiring
                .iter()
                .map(|entry| format!("  {}: {}", entry.item.name, entry.label())),
        );
    }

    let restock = needs_restock(inventory);
    if restock.is_empty() {
        lines.push("All regular items are in stock.".to_owned());
    } else {
        lines.push("Restock:".to_owned());
        lines.extend(restock.iter().map(|item| {
            pantry.catalog().prices.cheapest(&item.name).map_or_else(
                || format!("  {}", item.name),
                |entry| format!("  {} (cheapest: {entry})", item.name),
            )
        }));
    }

    lines
}
