//! Pantry Core - Domain library for the pantry tracker.
//!
//! This crate is shared by both shells:
//! - `web` - Server-rendered pantry page
//! - `cli` - Command-line access to the same pantry
//!
//! # Architecture
//!
//! The core crate contains types, pure derivations, the update function and
//! the capability traits the shells implement. No network, no filesystem, no
//! HTTP: persistence, sign-in and scanning are reached only through
//! [`storage::KeyValueStore`], [`identity::IdentityProvider`] and
//! [`scanner::CodeScanner`].
//!
//! # Modules
//!
//! - [`types`] - Items, recipes, prices and the signed-in user
//! - [`catalog`] - Built-in or YAML-loaded recipes and price table
//! - [`reminders`] - Soon-to-expire and needs-restock views
//! - [`recipes`] - Recipe feasibility and cooking
//! - [`state`] - Application state and the pure `update` function
//! - [`storage`] - Load/save against a key-value store
//! - [`identity`] - Sign-in token decoding
//! - [`scanner`] - Barcode capture session

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod identity;
pub mod recipes;
pub mod reminders;
pub mod scanner;
pub mod settings;
pub mod state;
pub mod storage;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use rust_decimal::Decimal;
pub use settings::Settings;
pub use state::{Action, PantryState, Touched, update};
pub use types::*;
