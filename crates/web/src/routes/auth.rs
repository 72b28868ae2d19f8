//! Sign-in route handlers.
//!
//! Google Identity Services posts the signed credential to the login URI
//! configured on the page; the payload is decoded without verifying the
//! signature.

use axum::{Form, extract::State, response::Redirect};
use pantry_core::Action;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::state::AppState;

/// Form posted by Google Identity Services.
#[derive(Debug, Deserialize)]
pub struct CredentialForm {
    pub credential: String,
}

/// Handle the sign-in callback.
///
/// A token that cannot be decoded is logged and sign-in does not complete.
#[instrument(skip(state, form))]
pub async fn google_callback(
    State(state): State<AppState>,
    Form(form): Form<CredentialForm>,
) -> Result<Redirect> {
    let Some(identity) = state.identity() else {
        return Err(AppError::NotFound("sign-in is not configured".to_string()));
    };

    match identity.sign_in(&form.credential) {
        Ok(user) => {
            tracing::info!(email = %user.email, "Signed in");
            set_sentry_user(&user);
            add_breadcrumb("auth", "Signed in", &[]);
            state.dispatch(Action::SignIn(user)).await?;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rejected sign-in credential");
        }
    }

    Ok(Redirect::to("/"))
}

/// Sign out and forget the stored user.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Result<Redirect> {
    state.dispatch(Action::SignOut).await?;
    clear_sentry_user();
    add_breadcrumb("auth", "Signed out", &[]);
    tracing::info!("Signed out");
    Ok(Redirect::to("/"))
}
