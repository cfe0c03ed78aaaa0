use std::net::SocketAddr;

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::response::{AppendHeaders, IntoResponse};
use axum::routing::{get, post};

use crate::config::ServerConfig;

use super::*;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    assert_eq!(
        upstream_url("http://127.0.0.1:8080", "/api/products?page=2"),
        "http://127.0.0.1:8080/api/products?page=2"
    );
}

#[test]
fn upstream_url_avoids_double_slash() {
    assert_eq!(
        upstream_url("https://api.example.com/", "/api/auth/login"),
        "https://api.example.com/api/auth/login"
    );
}

// =============================================================================
// header filtering
// =============================================================================

#[test]
fn forwardable_keeps_end_to_end_headers() {
    for name in [header::COOKIE, header::SET_COOKIE, header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT] {
        assert!(forwardable(&name), "{name}");
    }
}

#[test]
fn forwardable_drops_hop_by_hop_and_host() {
    for name in [
        header::HOST,
        header::CONTENT_LENGTH,
        header::CONNECTION,
        header::TRANSFER_ENCODING,
        header::UPGRADE,
        header::TE,
        header::PROXY_AUTHORIZATION,
    ] {
        assert!(!forwardable(&name), "{name}");
    }
}

#[test]
fn copy_headers_preserves_repeated_values() {
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));

    let copied = copy_headers(&headers);
    assert_eq!(copied.get_all(header::SET_COOKIE).iter().count(), 2);
    assert!(copied.get(header::CONNECTION).is_none());
}

// =============================================================================
// ProxyError
// =============================================================================

#[test]
fn oversize_body_maps_to_413() {
    let resp = ProxyError::TooLarge("length limit exceeded".to_owned()).into_response();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[test]
fn unreadable_body_maps_to_400() {
    let resp = ProxyError::Body("connection reset".to_owned()).into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn upstream_errors_map_to_502() {
    assert_eq!(
        ProxyError::Upstream("connection refused".to_owned()).into_response().status(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(ProxyError::Response("eof".to_owned()).into_response().status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn error_response_is_json() {
    let resp = ProxyError::Upstream("timeout".to_owned()).into_response();
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
}

#[test]
fn public_message_hides_internal_detail() {
    let err = ProxyError::Upstream("dns error: api.internal".to_owned());
    assert!(!err.public_message().contains("api.internal"));
}

// =============================================================================
// forward, end to end against a local upstream
// =============================================================================

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    addr
}

async fn upstream_products() -> impl IntoResponse {
    (
        StatusCode::CREATED,
        AppendHeaders([(header::SET_COOKIE, "session=abc"), (header::SET_COOKIE, "theme=dark")]),
        r#"[{"id":1,"name":"Mug","price":1280}]"#,
    )
}

async fn upstream_login(headers: HeaderMap, body: String) -> impl IntoResponse {
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    (StatusCode::UNAUTHORIZED, format!("{cookie}|{body}"))
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

async fn proxy_for(upstream: &str, max_body_bytes: usize) -> SocketAddr {
    let config = ServerConfig {
        port: 0,
        api_upstream_url: upstream.to_owned(),
        proxy_timeout_secs: 5,
        proxy_max_body_bytes: max_body_bytes,
    };
    let state = AppState::new(&config).unwrap();
    serve(crate::routes::api_routes(state)).await
}

#[tokio::test]
async fn forward_relays_status_body_and_cookies() {
    let upstream = serve(Router::new().route("/api/products", get(upstream_products))).await;
    let proxy = proxy_for(&format!("http://{upstream}"), 1024).await;

    let resp = client().get(format!("http://{proxy}/api/products")).send().await.unwrap();

    assert_eq!(resp.status().as_u16(), 201);
    let cookies: Vec<_> = resp
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_owned())
        .collect();
    assert_eq!(cookies, vec!["session=abc", "theme=dark"]);
    assert_eq!(resp.text().await.unwrap(), r#"[{"id":1,"name":"Mug","price":1280}]"#);
}

#[tokio::test]
async fn forward_passes_method_cookie_and_body_and_relays_401() {
    let upstream = serve(Router::new().route("/api/auth/login", post(upstream_login))).await;
    let proxy = proxy_for(&format!("http://{upstream}"), 1024).await;

    let resp = client()
        .post(format!("http://{proxy}/api/auth/login"))
        .header(header::COOKIE, "session=abc")
        .body(r#"{"email":"a@b.co"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 401);
    assert_eq!(resp.text().await.unwrap(), r#"session=abc|{"email":"a@b.co"}"#);
}

#[tokio::test]
async fn forward_rejects_oversize_body_with_413() {
    let upstream = serve(Router::new().route("/api/auth/login", post(upstream_login))).await;
    let proxy = proxy_for(&format!("http://{upstream}"), 16).await;

    let resp = client()
        .post(format!("http://{proxy}/api/auth/login"))
        .body("x".repeat(64))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 413);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "請求內容過大");
}

#[tokio::test]
async fn forward_maps_unreachable_upstream_to_502() {
    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = closed.local_addr().unwrap();
    drop(closed);
    let proxy = proxy_for(&format!("http://{addr}"), 1024).await;

    let resp = client().get(format!("http://{proxy}/api/products")).send().await.unwrap();

    assert_eq!(resp.status().as_u16(), 502);
}
