//! Request errors and Sentry reporting.
//!
//! Handlers return [`Result`]; an [`AppError`] turns into a plain-text
//! response. Server-side failures are sent to Sentry first and their details
//! stay out of the response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pantry_core::SignedInUser;
use pantry_core::storage::StorageError;
use thiserror::Error;

/// Application-level error type for the web shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Writing the new state failed. In-memory state keeps the update.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Feature not configured.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Form field that does not parse.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if !status.is_server_error() {
            return (status, self.to_string()).into_response();
        }

        let event_id = sentry::capture_error(&self);
        tracing::error!(error = %self, sentry_event_id = %event_id, "Failed to save pantry");
        (status, "Could not save your pantry").into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Attach the signed-in user to Sentry events.
pub fn set_sentry_user(user: &SignedInUser) {
    let sentry_user = sentry::User {
        id: Some(user.subject.clone()),
        email: Some(user.email.to_string()),
        username: Some(user.name.clone()),
        ..Default::default()
    };
    sentry::configure_scope(|scope| scope.set_user(Some(sentry_user)));
}

pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| scope.set_user(None));
}

/// Record a user action as a Sentry breadcrumb.
pub fn add_breadcrumb(category: &str, message: &str, data: &[(&str, &str)]) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_owned()),
        message: Some(message.to_owned()),
        ..Default::default()
    };
    breadcrumb.data.extend(
        data.iter()
            .map(|(key, value)| ((*key).to_owned(), serde_json::Value::from(*value))),
    );
    sentry::add_breadcrumb(breadcrumb);
}
