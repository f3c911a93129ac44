use std::path::{Component, Path as FsPath};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::api::response::ApiError;
use crate::content_type;
use crate::AppState;

/// Serve the bootstrap document.
/// Route: GET /
pub async fn serve_index(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    serve_from_root(&state, "index.html").await
}

/// Serve statically-placed files under the store root.
/// Route: any method on /*path — containment is decided before the method,
/// so an escaping path is 400 even when the verb would otherwise be a 405.
pub async fn serve_static(
    State(state): State<Arc<AppState>>,
    method: Method,
    axum::extract::Path(path): axum::extract::Path<String>,
) -> Result<Response, ApiError> {
    ensure_contained(&path)?;

    if method != Method::GET && method != Method::HEAD {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }
    serve_from_root(&state, &path).await
}

/// Wildcard paths may contain separators, so containment is checked
/// component-wise: normal components only, nothing dot-prefixed.
fn ensure_contained(rel: &str) -> Result<(), ApiError> {
    let contained = FsPath::new(rel).components().all(|c| match c {
        Component::Normal(name) => !name.to_string_lossy().starts_with('.'),
        _ => false,
    });
    if !contained {
        return Err(ApiError::bad_request("Invalid resource name."));
    }
    Ok(())
}

/// `rel` must already be containment-checked (or a literal).
async fn serve_from_root(state: &AppState, rel: &str) -> Result<Response, ApiError> {
    let full_path = FsPath::new(&state.config.data_dir).join(rel);
    let data = match tokio::fs::read(&full_path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ApiError::not_found("File not found."));
        }
        Err(e) => {
            tracing::error!(error = %e, path = %full_path.display(), "Static read failed");
            return Err(ApiError::internal("Storage failure."));
        }
    };

    let mut response = (StatusCode::OK, data).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type::resolve(rel)),
    );
    Ok(response)
}
