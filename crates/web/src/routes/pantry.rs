//! Pantry page: the declarative view over the current state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use chrono::NaiveDate;
use pantry_core::recipes::recipe_statuses;
use pantry_core::reminders::{ExpiringItem, expiring_soon, needs_restock};
use pantry_core::{Catalog, PantryItem, PriceEntry, Settings, SignedInUser};
use tracing::instrument;

use crate::state::{AppState, Session, today};

// =============================================================================
// View Models
// =============================================================================

/// Inventory row.
#[derive(Clone)]
pub struct ItemView {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub expires_on: Option<String>,
    pub barcode: Option<String>,
    pub regular: bool,
    pub cheapest: Option<String>,
}

/// Soon-to-expire reminder.
#[derive(Clone)]
pub struct ExpiringView {
    pub name: String,
    pub label: String,
    pub expired: bool,
}

/// Restock reminder.
#[derive(Clone)]
pub struct RestockView {
    pub name: String,
    pub cheapest: Option<String>,
}

/// Recipe suggestion.
#[derive(Clone)]
pub struct RecipeView {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub missing: String,
    pub cookable: bool,
}

/// Signed-in user panel.
#[derive(Clone)]
pub struct UserView {
    pub name: String,
    pub email: String,
}

/// Scanning panel.
#[derive(Clone)]
pub struct ScanView {
    pub scanning: bool,
    pub status: Option<String>,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl ItemView {
    fn new(item: &PantryItem, catalog: &Catalog) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            quantity: item.quantity,
            expires_on: item.expires_on.map(|date| date.format("%Y-%m-%d").to_string()),
            barcode: item.barcode.clone(),
            regular: item.regular,
            cheapest: catalog.prices.cheapest(&item.name).map(PriceEntry::to_string),
        }
    }
}

impl From<ExpiringItem<'_>> for ExpiringView {
    fn from(entry: ExpiringItem<'_>) -> Self {
        Self {
            name: entry.item.name.clone(),
            label: entry.label(),
            expired: entry.is_expired(),
        }
    }
}

impl From<&SignedInUser> for UserView {
    fn from(user: &SignedInUser) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.to_string(),
        }
    }
}

/// Pantry page template.
#[derive(Template, WebTemplate)]
#[template(path = "pantry.html")]
pub struct PantryTemplate {
    pub items: Vec<ItemView>,
    pub expiring: Vec<ExpiringView>,
    pub restock: Vec<RestockView>,
    pub recipes: Vec<RecipeView>,
    pub user: Option<UserView>,
    pub google_client_id: Option<String>,
    pub scan: ScanView,
    pub draft_name: String,
    pub expiry_window_days: i64,
}

impl PantryTemplate {
    /// Derive every view of the page from the session.
    #[must_use]
    pub fn build(
        session: &Session,
        catalog: &Catalog,
        settings: &Settings,
        google_client_id: Option<String>,
        today: NaiveDate,
    ) -> Self {
        let inventory = &session.pantry.inventory;

        let expiring = expiring_soon(inventory, today, settings.expiry_window_days)
            .into_iter()
            .map(ExpiringView::from)
            .collect();

        let restock = needs_restock(inventory)
            .into_iter()
            .map(|item| RestockView {
                name: item.name.clone(),
                cheapest: catalog.prices.cheapest(&item.name).map(PriceEntry::to_string),
            })
            .collect();

        let recipes = recipe_statuses(&catalog.recipes, inventory)
            .into_iter()
            .map(|status| RecipeView {
                name: status.recipe.name.clone(),
                ingredients: status.recipe.ingredients.join(", "),
                instructions: status.recipe.instructions.clone(),
                missing: status.missing.join(", "),
                cookable: status.cookable(),
            })
            .collect();

        Self {
            items: inventory
                .iter()
                .map(|item| ItemView::new(item, catalog))
                .collect(),
            expiring,
            restock,
            recipes,
            user: session.pantry.user.as_ref().map(UserView::from),
            google_client_id,
            scan: ScanView {
                scanning: session.scan.is_scanning(),
                status: session.scan.status().map(str::to_string),
            },
            draft_name: session.draft_name.clone().unwrap_or_default(),
            expiry_window_days: settings.expiry_window_days,
        }
    }
}

/// Display the pantry page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session().await;
    PantryTemplate::build(
        &session,
        state.catalog(),
        state.settings(),
        state
            .identity()
            .map(|identity| identity.client_id().to_string()),
        today(),
    )
}
