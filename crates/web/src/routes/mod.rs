//! HTTP route handlers for the pantry page.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Pantry page
//! GET  /health                 - Health check
//!
//! # Inventory
//! POST /items                  - Add item
//! POST /items/{id}/use         - Use one step of an item
//! POST /items/{id}/delete      - Remove item
//!
//! # Recipes
//! POST /recipes/cook           - Cook a recipe
//!
//! # Auth
//! POST /auth/google/callback   - Google Identity Services login URI
//! POST /auth/logout            - Sign out
//!
//! # Scanning
//! POST /scan/start             - Open the scanning panel
//! POST /scan/stop              - Cancel scanning
//! POST /scan/result            - Browser-side scan result
//! ```
//!
//! Every POST answers with a `303 See Other` back to `/`.

pub mod auth;
pub mod items;
pub mod pantry;
pub mod recipes;
pub mod scan;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the inventory routes router.
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(items::add))
        .route("/{id}/use", post(items::use_item))
        .route("/{id}/delete", post(items::delete))
}

/// Create the recipe routes router.
pub fn recipe_routes() -> Router<AppState> {
    Router::new().route("/cook", post(recipes::cook))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/google/callback", post(auth::google_callback))
        .route("/logout", post(auth::logout))
}

/// Create the scanning routes router.
pub fn scan_routes() -> Router<AppState> {
    Router::new()
        .route("/start", post(scan::start))
        .route("/stop", post(scan::stop))
        .route("/result", post(scan::result))
}

/// Create all routes for the pantry page.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pantry::show))
        .route("/health", get(health))
        .nest("/items", item_routes())
        .nest("/recipes", recipe_routes())
        .nest("/auth", auth_routes())
        .nest("/scan", scan_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}
