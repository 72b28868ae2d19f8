//! Configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PANTRY_HOST` - Bind address (default: 127.0.0.1)
//! - `PANTRY_PORT` - Listen port (default: 3000)
//! - `PANTRY_DATA_DIR` - Directory holding the persisted JSON values (default: .pantry)
//! - `PANTRY_GOOGLE_CLIENT_ID` - Google Identity Services client ID; sign-in is hidden without it
//! - `PANTRY_CATALOG` - YAML file replacing the built-in recipes and prices
//! - `PANTRY_EXPIRY_WINDOW_DAYS` - "Soon to expire" window in days (default: 5)
//! - `PANTRY_USE_STEP` - Quantity removed per use or cook, at least 1 (default: 1)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::str::FromStr;

use pantry_core::Settings;
use thiserror::Error;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".pantry";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Where the key-value store keeps its files
    pub data_dir: PathBuf,
    /// Identity SDK client ID, if sign-in is enabled
    pub google_client_id: Option<String>,
    /// Catalog override
    pub catalog_path: Option<PathBuf>,
    /// Reminder and consumption thresholds
    pub settings: Settings,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: parse_var("PANTRY_HOST", get_optional_env("PANTRY_HOST"), "127.0.0.1")?,
            port: parse_var("PANTRY_PORT", get_optional_env("PANTRY_PORT"), "3000")?,
            data_dir: data_dir_from_env(),
            google_client_id: google_client_id_from_env(),
            catalog_path: catalog_path_from_env(),
            settings: settings_from_env()?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Thresholds from `PANTRY_EXPIRY_WINDOW_DAYS` and `PANTRY_USE_STEP`.
///
/// # Errors
///
/// Returns `ConfigError` if either variable is set but not a number, or if
/// the step is zero.
pub fn settings_from_env() -> Result<Settings, ConfigError> {
    settings_from(
        get_optional_env("PANTRY_EXPIRY_WINDOW_DAYS"),
        get_optional_env("PANTRY_USE_STEP"),
    )
}

fn settings_from(window: Option<String>, step: Option<String>) -> Result<Settings, ConfigError> {
    let use_step: NonZeroU32 = parse_var(
        "PANTRY_USE_STEP",
        step,
        &Settings::DEFAULT_USE_STEP.to_string(),
    )?;

    Ok(Settings {
        expiry_window_days: parse_var(
            "PANTRY_EXPIRY_WINDOW_DAYS",
            window,
            &Settings::DEFAULT_EXPIRY_WINDOW_DAYS.to_string(),
        )?,
        use_step: use_step.get(),
    })
}

/// `PANTRY_DATA_DIR`, or [`DEFAULT_DATA_DIR`].
#[must_use]
pub fn data_dir_from_env() -> PathBuf {
    get_optional_env("PANTRY_DATA_DIR").map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from)
}

/// `PANTRY_GOOGLE_CLIENT_ID`, if set.
#[must_use]
pub fn google_client_id_from_env() -> Option<String> {
    get_optional_env("PANTRY_GOOGLE_CLIENT_ID")
}

/// `PANTRY_CATALOG`, if set.
#[must_use]
pub fn catalog_path_from_env() -> Option<PathBuf> {
    get_optional_env("PANTRY_CATALOG").map(PathBuf::from)
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse a variable's value, falling back to `default` when unset.
fn parse_var<T>(key: &str, value: Option<String>, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = value.unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
