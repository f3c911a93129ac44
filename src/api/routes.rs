use axum::extract::DefaultBodyLimit;
use axum::routing::{any, get, on, MethodFilter};
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{cors, handlers};
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let upload_limit = state.config.max_upload_size as usize;

    // GET and HEAD are registered separately: HEAD answers from stat() and
    // must not read content.
    let resource = on(MethodFilter::GET, handlers::read_resource)
        .on(MethodFilter::HEAD, handlers::stat_resource)
        .on(MethodFilter::POST, handlers::create_resource)
        .on(MethodFilter::PUT, handlers::upsert_resource)
        .on(MethodFilter::DELETE, handlers::delete_resource)
        .layer(DefaultBodyLimit::max(upload_limit));

    Router::new()
        // Resources
        .route("/data", get(handlers::list_resources))
        .route("/data/:id", resource)
        // Bootstrap document and statically-placed files. The wildcard is
        // method-agnostic: paths that escape the store root are rejected with
        // 400 no matter the verb, before any method resolution applies.
        .route("/", get(handlers::serve_index))
        .route("/*path", any(handlers::serve_static))
        // Internal
        .route("/_internal/health", get(handlers::health))
        .layer(middleware::from_fn(cors::enforce))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
