//! Expiry and restock reminders derived from the inventory.

use chrono::NaiveDate;

use crate::types::PantryItem;

/// An item close to (or past) its expiration date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiringItem<'a> {
    pub item: &'a PantryItem,
    /// Whole calendar days until expiry; negative once expired.
    pub days_left: i64,
}

impl ExpiringItem<'_> {
    /// Whether the item is already past its date.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.days_left < 0
    }

    /// Human-readable distance to the expiry date.
    #[must_use]
    pub fn label(&self) -> String {
        match self.days_left {
            d if d < -1 => format!("expired {} days ago", d.unsigned_abs()),
            -1 => "expired yesterday".to_owned(),
            0 => "expires today".to_owned(),
            1 => "expires tomorrow".to_owned(),
            d => format!("expires in {d} days"),
        }
    }
}

/// Items whose expiration date is at most `window_days` days after `today`.
///
/// Items without a date are skipped. Output keeps inventory order.
#[must_use]
pub fn expiring_soon(items: &[PantryItem], today: NaiveDate, window_days: i64) -> Vec<ExpiringItem<'_>> {
    items
        .iter()
        .filter_map(|item| {
            let expires_on = item.expires_on?;
            let days_left = (expires_on - today).num_days();
            (days_left <= window_days).then_some(ExpiringItem { item, days_left })
        })
        .collect()
}

/// Regular items that have run out.
#[must_use]
pub fn needs_restock(items: &[PantryItem]) -> Vec<&PantryItem> {
    items
        .iter()
        .filter(|item| item.regular && item.quantity <= 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;
    use crate::types::ItemId;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap_or_default()
    }

    fn expiring_in(days: i64) -> PantryItem {
        let expires_on = if days >= 0 {
            today().checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            today().checked_sub_days(Days::new(days.unsigned_abs()))
        };
        PantryItem {
            id: ItemId::generate(),
            name: format!("in {days} days"),
            quantity: 1,
            expires_on,
            barcode: None,
            regular: false,
        }
    }

    fn regular(quantity: i64) -> PantryItem {
        PantryItem {
            id: ItemId::generate(),
            name: "Coffee".to_owned(),
            quantity,
            expires_on: None,
            barcode: None,
            regular: true,
        }
    }

    #[test]
    fn test_window_is_inclusive() {
        let items = [expiring_in(5), expiring_in(6)];
        let soon = expiring_soon(&items, today(), 5);
        assert_eq!(soon.len(), 1);
        assert_eq!(soon[0].days_left, 5);
        assert_eq!(soon[0].item.name, "in 5 days");
    }

    #[test]
    fn test_expired_items_have_negative_days() {
        let items = [expiring_in(-3), expiring_in(0)];
        let soon = expiring_soon(&items, today(), 5);
        let days: Vec<i64> = soon.iter().map(|entry| entry.days_left).collect();
        assert_eq!(days, vec![-3, 0]);
    }

    #[test]
    fn test_labels() {
        let items = [
            expiring_in(-3),
            expiring_in(-1),
            expiring_in(0),
            expiring_in(1),
            expiring_in(4),
        ];
        let labels: Vec<String> = expiring_soon(&items, today(), 5)
            .iter()
            .map(ExpiringItem::label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "expired 3 days ago",
                "expired yesterday",
                "expires today",
                "expires tomorrow",
                "expires in 4 days",
            ]
        );
        assert!(expiring_soon(&items, today(), 5)[0].is_expired());
    }

    #[test]
    fn test_undated_items_are_skipped() {
        let mut undated = expiring_in(1);
        undated.expires_on = None;
        assert!(expiring_soon(&[undated], today(), 5).is_empty());
    }

    #[test]
    fn test_custom_window() {
        let items = [expiring_in(2), expiring_in(3)];
        assert_eq!(expiring_soon(&items, today(), 2).len(), 1);
    }

    #[test]
    fn test_restock_regular_and_depleted() {
        let items = [regular(0), regular(1), regular(-1)];
        let restock = needs_restock(&items);
        let quantities: Vec<i64> = restock.iter().map(|item| item.quantity).collect();
        assert_eq!(quantities, vec![0, -1]);
    }

    #[test]
    fn test_restock_ignores_non_regular() {
        let mut item = regular(0);
        item.regular = false;
        assert!(needs_restock(&[item]).is_empty());
    }
}
