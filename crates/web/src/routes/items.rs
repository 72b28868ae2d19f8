//! Inventory route handlers.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use chrono::NaiveDate;
use pantry_core::{Action, ItemId, NewItem};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Add-item form data.
///
/// Every field arrives as text; blank fields fall back to their defaults.
#[derive(Debug, Default, Deserialize)]
pub struct AddItemForm {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub expires_on: String,
    #[serde(default)]
    pub barcode: String,
    /// Present (as "on") only when the checkbox is ticked.
    pub regular: Option<String>,
}

impl AddItemForm {
    /// Parse the form into a new item description.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for a quantity or date that does not
    /// parse.
    pub fn parse(self) -> Result<NewItem> {
        let quantity = match self.quantity.trim() {
            "" => 1,
            raw => raw
                .parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("invalid quantity: {raw}")))?,
        };

        let expires_on = match self.expires_on.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| AppError::BadRequest(format!("invalid expiry date: {raw}")))?,
            ),
        };

        Ok(NewItem {
            name: self.name,
            quantity,
            expires_on,
            barcode: Some(self.barcode),
            regular: self.regular.is_some(),
        })
    }
}

// =============================================================================
// Routes
// =============================================================================

/// Add an item to the inventory.
#[instrument(skip(state, form))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddItemForm>) -> Result<Redirect> {
    let item = form
        .parse()?
        .into_item(ItemId::generate())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    add_breadcrumb("pantry", "Added item", &[("name", item.name.as_str())]);
    tracing::info!(id = %item.id, name = %item.name, quantity = item.quantity, "Adding item");

    let mut session = state.session().await;
    session.draft_name = None;
    state.apply(&mut session, Action::AddItem(item))?;

    Ok(Redirect::to("/"))
}

/// Use up one step of an item.
#[instrument(skip(state))]
pub async fn use_item(State(state): State<AppState>, Path(id): Path<ItemId>) -> Result<Redirect> {
    state.dispatch(Action::UseItem(id)).await?;
    Ok(Redirect::to("/"))
}

/// Remove an item from the inventory.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<ItemId>) -> Result<Redirect> {
    add_breadcrumb("pantry", "Deleted item", &[]);
    state.dispatch(Action::DeleteItem(id)).await?;
    Ok(Redirect::to("/"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(quantity: &str, expires_on: &str) -> AddItemForm {
        AddItemForm {
            name: "Milk".to_string(),
            quantity: quantity.to_string(),
            expires_on: expires_on.to_string(),
            ..AddItemForm::default()
        }
    }

    #[test]
    fn test_blank_fields_use_defaults() {
        let item = form("", " ").parse().unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.expires_on, None);
        assert!(!item.regular);
    }

    #[test]
    fn test_parses_quantity_and_date() {
        let mut raw = form("3", "2026-10-20");
        raw.regular = Some("on".to_string());
        let item = raw.parse().unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.expires_on, NaiveDate::from_ymd_opt(2026, 10, 20));
        assert!(item.regular);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(form("lots", "").parse(), Err(AppError::BadRequest(_))));
        assert!(matches!(
            form("1", "20/10/2026").parse(),
            Err(AppError::BadRequest(_))
        ));
    }
}
