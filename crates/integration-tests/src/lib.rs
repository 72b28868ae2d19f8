//! Integration tests for the pantry tracker.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pantry-integration-tests
//! ```
//!
//! Tests drive the web router in-process with `tower::ServiceExt::oneshot`
//! against a `FileStore` in a temporary directory, so persisted files can be
//! inspected and the app restarted over them.
//!
//! # Test Categories
//!
//! - `pantry_routes` - Inventory, recipe and page routes
//! - `persistence` - Restarting over the data directory
//! - `sign_in` - Identity callback and sign-out
//! - `scanning` - Scanning panel flow

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use pantry_core::identity::{GoogleIdentity, IdentityProvider};
use pantry_core::{Catalog, Settings};
use pantry_web::routes::routes;
use pantry_web::state::AppState;
use pantry_web::store::FileStore;
use tempfile::TempDir;
use tower::ServiceExt;

/// Client ID the test app configures sign-in with.
pub const CLIENT_ID: &str = "test-client.apps.googleusercontent.com";

/// Response captured from the router.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Whether this is the `303 See Other` back to the pantry page.
    #[must_use]
    pub fn is_redirect_home(&self) -> bool {
        self.status == StatusCode::SEE_OTHER && self.location.as_deref() == Some("/")
    }
}

/// The web app over a temporary data directory.
pub struct TestApp {
    dir: TempDir,
    identity: Option<Arc<dyn IdentityProvider>>,
    state: AppState,
    router: Router,
}

impl TestApp {
    /// App with sign-in configured.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self::open(
            tempfile::tempdir().expect("create temp dir"),
            Some(Arc::new(GoogleIdentity::new(CLIENT_ID))),
        )
    }

    /// App signing in through the given provider.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn with_identity(identity: Arc<dyn IdentityProvider>) -> Self {
        Self::open(tempfile::tempdir().expect("create temp dir"), Some(identity))
    }

    /// App with no Google client ID.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn without_sign_in() -> Self {
        Self::open(tempfile::tempdir().expect("create temp dir"), None)
    }

    fn open(dir: TempDir, identity: Option<Arc<dyn IdentityProvider>>) -> Self {
        let store = FileStore::open(dir.path()).expect("open file store");
        let state = AppState::new(
            Arc::new(store),
            Catalog::builtin(),
            Settings::default(),
            identity.clone(),
        );
        let router = routes().with_state(state.clone());
        Self {
            dir,
            identity,
            state,
            router,
        }
    }

    /// Start a fresh app over the same data directory.
    #[must_use]
    pub fn restart(self) -> Self {
        Self::open(self.dir, self.identity)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a GET request.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("build request");
        self.send(request).await
    }

    /// Send a form POST; `form` is already URL-encoded.
    pub async fn post(&self, uri: &str, form: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_owned()))
            .expect("build request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an unsigned ID token carrying the given claims.
#[must_use]
pub fn id_token(claims: &serde_json::Value) -> String {
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(claims.to_string()),
        URL_SAFE_NO_PAD.encode("signature"),
    )
}
