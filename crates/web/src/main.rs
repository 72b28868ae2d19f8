//! Pantry Web - Server-rendered pantry page.
//!
//! # Architecture
//!
//! - Axum with plain HTML form posts, every mutation redirecting back to `/`
//! - Askama templates for server-side rendering
//! - Google Identity Services posting its credential to `/auth/google/callback`
//! - Camera scanning in the browser, posting the decoded code back
//! - One JSON file per persisted key in the data directory

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::borrow::Cow;
use std::sync::Arc;

use pantry_core::identity::{GoogleIdentity, IdentityProvider};
use pantry_web::config::WebConfig;
use pantry_web::routes;
use pantry_web::state::AppState;
use pantry_web::store::{FileStore, load_catalog};
use sentry::integrations::tracing::{self as sentry_tracing, EventFilter};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Start Sentry when a DSN is configured. The guard flushes on drop.
fn init_sentry(config: &WebConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_deref()?;
    let options = sentry::ClientOptions {
        release: sentry::release_name!(),
        environment: config.sentry_environment.clone().map(Cow::Owned),
        attach_stacktrace: true,
        ..Default::default()
    };
    Some(sentry::init((dsn, options)))
}

/// Log to stdout; warnings and errors also become Sentry events.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pantry_web=info,pantry_core=info,tower_http=debug".into());

    let sentry_layer = sentry_tracing::layer().event_filter(|metadata| match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => EventFilter::Breadcrumb,
        _ => EventFilter::Ignore,
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_layer)
        .init();
}

#[tokio::main]
async fn main() {
    let config = WebConfig::from_env().expect("Failed to load configuration");

    // Sentry before tracing so the tracing layer has a client
    let sentry_guard = init_sentry(&config);
    init_tracing();
    if sentry_guard.is_some() {
        tracing::info!("Sentry initialized");
    }

    let store = FileStore::open(&config.data_dir).expect("Failed to open data directory");
    tracing::info!(dir = %store.dir().display(), "Using data directory");

    let catalog = load_catalog(config.catalog_path.as_deref()).expect("Failed to load catalog");

    let identity = config
        .google_client_id
        .clone()
        .map(|client_id| Arc::new(GoogleIdentity::new(client_id)) as Arc<dyn IdentityProvider>);
    if identity.is_none() {
        tracing::info!("PANTRY_GOOGLE_CLIENT_ID not set, sign-in disabled");
    }

    let state = AppState::new(Arc::new(store), catalog, config.settings, identity);

    let app = routes::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!("pantry listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    drop(sentry_guard);
}

/// Resolve on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
