use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;

use crate::api::response::ApiError;
use crate::content_type;
use crate::AppState;

/// GET /data — all current resource names as a JSON array.
pub async fn list_resources(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let ids = state.store.list().await?;
    Ok(Json(ids))
}

/// GET /data/:id — full content with resolved Content-Type.
pub async fn read_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let content = state.store.read(&id).await?;

    let mut response = (StatusCode::OK, content).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type::resolve(&id)),
    );
    Ok(response)
}

/// HEAD /data/:id — metadata headers only, no content transfer.
pub async fn stat_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let meta = state.store.stat(&id).await?;

    let mut response = StatusCode::OK.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type::resolve(&id)),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(meta.size));
    let last_modified = meta.modified.format("%a, %d %b %Y %H:%M:%S GMT").to_string();
    if let Ok(value) = last_modified.parse() {
        headers.insert(header::LAST_MODIFIED, value);
    }
    Ok(response)
}

/// POST /data/:id — upsert; the body is opaque bytes.
pub async fn create_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    state.store.put(&id, body).await?;
    tracing::debug!(id = %id, "Created resource");
    Ok((StatusCode::CREATED, "File created successfully.").into_response())
}

/// PUT /data/:id — upsert; creates the resource if absent, replaces otherwise.
pub async fn upsert_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    state.store.put(&id, body).await?;
    tracing::debug!(id = %id, "Wrote resource");
    Ok((StatusCode::OK, "File created/updated successfully.").into_response())
}

/// DELETE /data/:id.
pub async fn delete_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    state.store.delete(&id).await?;
    tracing::debug!(id = %id, "Deleted resource");
    Ok((StatusCode::OK, "File deleted successfully.").into_response())
}
