//! Pantry Web - Server-rendered pantry page.
//!
//! This crate provides the web shell as a library so the CLI and the
//! integration tests can reuse its store, configuration and router.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod scanner;
pub mod state;
pub mod store;
