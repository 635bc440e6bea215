//! Admin API proxy.
//!
//! Every `/api/admin/{*path}` request is replayed against the configured
//! backend with the same method, query string and body. Only the headers the
//! backend needs for auth and decoding are forwarded; backend statuses pass
//! through untouched.
//!
//! The backend path is taken from the raw request URI, so percent-encoded
//! ids (`a%2Fb`, `a%3Fb`) reach the backend still encoded.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::{OriginalUri, State};
use axum::http::{HeaderMap, HeaderName, Method, Uri, header};
use axum::response::Response;

use crate::error::ProxyError;
use crate::state::AppState;

/// Mount point of the proxy on both sides.
pub const ADMIN_PREFIX: &str = "/api/admin/";

/// CSRF header checked by session-authenticated backends on unsafe methods.
pub const CSRF_TOKEN: HeaderName = HeaderName::from_static("x-csrftoken");

/// Request headers copied onto the backend call.
pub static FORWARDED_REQUEST_HEADERS: [HeaderName; 5] =
    [header::COOKIE, header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT, CSRF_TOKEN];

/// Backend response headers copied back to the browser.
pub const FORWARDED_RESPONSE_HEADERS: &[HeaderName] = &[header::CONTENT_TYPE, header::SET_COOKIE, header::CACHE_CONTROL];

/// Absolute backend URL for an admin path (without its `/api/admin/` prefix).
/// `path` is used verbatim and must still be percent-encoded.
#[must_use]
pub fn backend_url(base: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/api/admin/{path}?{q}"),
        None => format!("{base}/api/admin/{path}"),
    }
}

/// The still-encoded admin path of a request URI, without the prefix.
#[must_use]
pub fn admin_path(uri: &Uri) -> Option<&str> {
    uri.path().strip_prefix(ADMIN_PREFIX)
}

/// True when any decoded segment of an encoded path is `..`, which URL
/// normalization would resolve above the prefix.
#[must_use]
pub fn escapes_prefix(path: &str) -> bool {
    path.split('/')
        .any(|segment| &*urlencoding::decode_binary(segment.as_bytes()) == b"..")
}

/// Copy the allow-listed headers (all values) out of `source`.
#[must_use]
pub fn select_headers(source: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut selected = HeaderMap::new();
    for name in names {
        for value in source.get_all(name) {
            selected.append(name.clone(), value.clone());
        }
    }
    selected
}

/// `ANY /api/admin/{*path}`: forward to the backend and relay its answer.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = admin_path(&uri).unwrap_or_default();
    if escapes_prefix(path) {
        return Err(ProxyError::InvalidPath(path.to_owned()));
    }

    let url = backend_url(&state.config.backend_url, path, uri.query());
    tracing::debug!(%method, %url, "forwarding admin request");

    let mut request = state
        .http
        .request(method.clone(), &url)
        .headers(select_headers(&headers, &FORWARDED_REQUEST_HEADERS));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let response_headers = select_headers(upstream.headers(), FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ProxyError::ResponseBody(e.to_string()))?;

    if status.is_server_error() {
        tracing::warn!(%method, %url, status = status.as_u16(), "backend returned server error");
    } else {
        tracing::debug!(%method, %url, status = status.as_u16(), "backend answered");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
