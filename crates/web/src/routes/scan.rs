//! Scanning panel route handlers.

use axum::{Form, extract::State, response::Redirect};
use pantry_core::scanner::capture;
use tracing::instrument;

use crate::scanner::{ScanResultForm, SubmittedScan};
use crate::state::AppState;

/// Open the scanning panel.
#[instrument(skip(state))]
pub async fn start(State(state): State<AppState>) -> Redirect {
    state.session().await.scan.start();
    Redirect::to("/")
}

/// Close the scanning panel, discarding any late result.
#[instrument(skip(state))]
pub async fn stop(State(state): State<AppState>) -> Redirect {
    state.session().await.scan.stop();
    Redirect::to("/")
}

/// Receive the result of a browser-side scan.
///
/// A decoded code pre-fills the add-item name.
#[instrument(skip(state))]
pub async fn result(State(state): State<AppState>, Form(form): Form<ScanResultForm>) -> Redirect {
    let scanner = SubmittedScan::from(form);
    let mut session = state.session().await;

    if let Some(code) = capture(&scanner, &mut session.scan).await {
        session.draft_name = Some(code);
    }

    Redirect::to("/")
}
