//! Cross-origin policy applied to every request.

use axum::extract::Request;
use axum::http::{header::HeaderValue, HeaderMap, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Set the pod's CORS headers plus the identifying server token.
pub fn apply_headers(headers: &mut HeaderMap) {
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET, HEAD, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(
        "X-Powered-By",
        HeaderValue::from_static(concat!("datapod/", env!("CARGO_PKG_VERSION"))),
    );
}

/// Middleware enforcing the cross-origin contract.
///
/// Preflight `OPTIONS` requests short-circuit here with `204 No Content`,
/// regardless of path, and never reach a handler or the store. All other
/// responses get the CORS headers appended on the way out.
pub async fn enforce(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(req).await;
    apply_headers(response.headers_mut());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_set_is_complete() {
        let mut headers = HeaderMap::new();
        apply_headers(&mut headers);

        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            headers["Access-Control-Allow-Methods"],
            "GET, HEAD, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            headers["Access-Control-Allow-Headers"],
            "Content-Type, Authorization"
        );
        assert!(headers["X-Powered-By"]
            .to_str()
            .unwrap()
            .starts_with("datapod/"));
    }
}
