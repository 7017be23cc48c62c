use std::net::SocketAddr;

use axum::Router;
use axum::http::HeaderValue;
use axum::extract::Path;
use axum::routing::any;
use serde_json::{Value, json};

use super::*;
use crate::config::HostConfig;
use crate::routes::api_routes;

// =============================================================================
// upstream_url / forwarded_headers
// =============================================================================

#[test]
fn upstream_url_keeps_trailing_slash() {
    assert_eq!(
        upstream_url("http://localhost:8000", "products/7/", None),
        "http://localhost:8000/api/products/7/"
    );
}

#[test]
fn upstream_url_appends_query() {
    assert_eq!(
        upstream_url("http://backend", "products/", Some("page=2&q=tea")),
        "http://backend/api/products/?page=2&q=tea"
    );
}

#[test]
fn upstream_url_ignores_empty_query() {
    assert_eq!(upstream_url("http://backend", "users/me/", Some("")), "http://backend/api/users/me/");
}

#[test]
fn api_tail_keeps_percent_encoding() {
    assert_eq!(api_tail("/api/products/a%2Fb/"), "products/a%2Fb/");
    assert_eq!(api_tail("/api/users/me/"), "users/me/");
}

#[test]
fn forwarded_headers_keeps_only_backend_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok123"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert("cookie", HeaderValue::from_static("sid=1"));
    headers.insert("host", HeaderValue::from_static("console.local"));

    let out = forwarded_headers(&headers);
    assert_eq!(out.len(), 3);
    assert_eq!(out.get(AUTHORIZATION).unwrap(), "Bearer tok123");
    assert!(out.get("cookie").is_none());
    assert!(out.get("host").is_none());
}

// =============================================================================
// forward: end-to-end against a local stand-in backend
// =============================================================================

/// Echoes what the backend received as JSON.
async fn echo_backend(
    method: Method,
    uri: axum::http::Uri,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header = |name: HeaderName| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    let echo = json!({
        "method": method.as_str(),
        "path": path,
        "raw_path": uri.path(),
        "query": query,
        "authorization": header(AUTHORIZATION),
        "cookie": headers.get("cookie").and_then(|v| v.to_str().ok()),
        "body": String::from_utf8_lossy(&body),
    });
    let status = if path.starts_with("missing") { StatusCode::NOT_FOUND } else { StatusCode::CREATED };
    (status, axum::Json(echo))
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn host_for(backend_url: String) -> SocketAddr {
    let config = HostConfig { port: 0, backend_url, proxy_timeout_secs: 5 };
    let state = AppState::new(&config).unwrap();
    serve(api_routes(state)).await
}

#[tokio::test]
async fn forward_replays_method_path_query_and_auth() {
    let backend = serve(Router::new().route("/api/{*path}", any(echo_backend))).await;
    let host = host_for(format!("http://{backend}")).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{host}/api/products/3/research/?verbose=1"))
        .header(AUTHORIZATION, "Bearer tok123")
        .header("cookie", "sid=secret")
        .header(CONTENT_TYPE, "application/json")
        .body(r#"{"product_id":3}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    let echo: Value = resp.json().await.unwrap();
    assert_eq!(echo["method"], "POST");
    assert_eq!(echo["path"], "products/3/research/");
    assert_eq!(echo["query"], "verbose=1");
    assert_eq!(echo["authorization"], "Bearer tok123");
    assert_eq!(echo["cookie"], Value::Null);
    assert_eq!(echo["body"], r#"{"product_id":3}"#);
}

#[tokio::test]
async fn forward_keeps_encoded_separators_in_segments() {
    let backend = serve(Router::new().route("/api/{*path}", any(echo_backend))).await;
    let host = host_for(format!("http://{backend}")).await;

    let resp = reqwest::get(format!("http://{host}/api/products/a%2Fb%3Fc/")).await.unwrap();
    let echo: Value = resp.json().await.unwrap();
    assert_eq!(echo["raw_path"], "/api/products/a%2Fb%3Fc/");
    assert_eq!(echo["query"], Value::Null);
}

#[tokio::test]
async fn forward_relays_backend_error_status() {
    let backend = serve(Router::new().route("/api/{*path}", any(echo_backend))).await;
    let host = host_for(format!("http://{backend}")).await;

    let resp = reqwest::get(format!("http://{host}/api/missing/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn forward_unreachable_backend_is_bad_gateway() {
    // Bind then drop to get a port nothing listens on.
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let host = host_for(format!("http://{closed}")).await;

    let resp = reqwest::get(format!("http://{host}/api/products/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn healthz_is_ok() {
    let host = host_for("http://127.0.0.1:9".to_string()).await;
    let resp = reqwest::get(format!("http://{host}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
