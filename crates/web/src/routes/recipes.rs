//! Recipe route handlers.

use axum::{Form, extract::State, response::Redirect};
use pantry_core::Action;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::state::AppState;

/// Cook form data.
#[derive(Debug, Deserialize)]
pub struct CookForm {
    pub recipe: String,
}

/// Cook a recipe, using one step of each ingredient.
///
/// Recipes with missing ingredients leave the inventory unchanged.
#[instrument(skip(state))]
pub async fn cook(State(state): State<AppState>, Form(form): Form<CookForm>) -> Result<Redirect> {
    add_breadcrumb("pantry", "Cooked recipe", &[("recipe", form.recipe.as_str())]);
    state.dispatch(Action::Cook(form.recipe)).await?;
    Ok(Redirect::to("/"))
}
