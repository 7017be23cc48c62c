//! Same-origin forwarder for the catalog backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app calls relative `/api/...` paths. Every such request is
//! replayed against the configured backend with the same method, query and
//! body, carrying only the headers the backend needs. The backend's status,
//! content type and body come back unchanged.

use axum::body::Bytes;
use axum::extract::{OriginalUri, RawQuery, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied to the backend.
fn forwarded_names() -> [HeaderName; 3] {
    [AUTHORIZATION, CONTENT_TYPE, ACCEPT]
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("catalog backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

/// Path after `/api/`, still percent-encoded as the client sent it.
pub fn api_tail(raw_path: &str) -> &str {
    raw_path.strip_prefix("/api/").unwrap_or(raw_path)
}

/// Backend URL for the raw `/api/` tail and raw query string.
pub fn upstream_url(backend_url: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{backend_url}/api/{}", path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// The subset of `headers` the backend sees.
pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in forwarded_names() {
        if let Some(value) = headers.get(&name) {
            out.insert(name, value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: replay the request against the backend.
pub async fn forward(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    // The `{*path}` capture is percent-decoded; the raw URI keeps `%2F` and `%3F` intact.
    let url = upstream_url(&state.backend_url, api_tail(uri.path()), query.as_deref());

    let mut request = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, %url, status = status.as_u16(), "proxied");

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
