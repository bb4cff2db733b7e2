//! Case file gateway library.
//!
//! Validates case and file identifiers, resolves them against a remote
//! volume, and serves the stored bytes for inline preview.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
