//! datapod - A minimal HTTP data pod.
//!
//! Exposes one flat directory as a set of named, mutable resources with:
//! - CRUD semantics over plain HTTP (POST/PUT are upserts, per pod convention)
//! - Content-type resolution from the resource name's extension
//! - Permissive CORS with preflight short-circuiting
//! - Per-resource write serialization and crash-safe (write-then-rename) writes
//! - Optional TLS via externally-provided PEM credentials

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod content_type;
pub mod store;

use std::sync::Arc;

use config::Config;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn store::ResourceStore>,
}
