use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;

use super::*;
use crate::routes::proxy_routes;

/// Echoes what the proxy forwarded and sets two cookies on the way back.
async fn echo(req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();
    let doc = serde_json::json!({
        "method": parts.method.as_str(),
        "uri": parts.uri.to_string(),
        "cookie": parts.headers.get(header::COOKIE).and_then(|v| v.to_str().ok()),
        "connection": parts.headers.get(header::CONNECTION).and_then(|v| v.to_str().ok()),
        "body": String::from_utf8_lossy(&body),
    });
    let mut response = (StatusCode::CREATED, axum::Json(doc)).into_response();
    let headers = response.headers_mut();
    headers.append(header::SET_COOKIE, HeaderValue::from_static("session=abc; HttpOnly"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("theme=dark"));
    response
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn config(upstream: &str, max_body_bytes: usize) -> HostConfig {
    HostConfig {
        port: 0,
        upstream_url: upstream.to_owned(),
        proxy_timeout: Duration::from_secs(5),
        max_body_bytes,
    }
}

async fn start_proxy(upstream: &str, max_body_bytes: usize) -> SocketAddr {
    let state = ProxyState::new(&config(upstream, max_body_bytes)).unwrap();
    serve(proxy_routes(state)).await
}

async fn start_echo_upstream() -> String {
    let addr = serve(Router::new().fallback(echo)).await;
    format!("http://{addr}")
}

#[tokio::test]
async fn forwards_method_path_query_body_and_cookie() {
    let upstream = start_echo_upstream().await;
    let proxy = start_proxy(&upstream, 1024).await;

    let response = reqwest::Client::new()
        .put(format!("http://{proxy}/api/schedule/exams/e1?draft=1"))
        .header("cookie", "session=abc")
        .body(r#"{"name":"Midterm"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let doc: serde_json::Value = response.json().await.unwrap();
    assert_eq!(doc["method"], "PUT");
    assert_eq!(doc["uri"], "/api/schedule/exams/e1?draft=1");
    assert_eq!(doc["cookie"], "session=abc");
    assert_eq!(doc["body"], r#"{"name":"Midterm"}"#);
}

#[tokio::test]
async fn student_paths_are_forwarded() {
    let upstream = start_echo_upstream().await;
    let proxy = start_proxy(&upstream, 1024).await;

    let response = reqwest::get(format!("http://{proxy}/students/me/subjects/available")).await.unwrap();
    let doc: serde_json::Value = response.json().await.unwrap();
    assert_eq!(doc["method"], "GET");
    assert_eq!(doc["uri"], "/students/me/subjects/available");
}

#[tokio::test]
async fn every_set_cookie_header_is_relayed() {
    let upstream = start_echo_upstream().await;
    let proxy = start_proxy(&upstream, 1024).await;

    let response = reqwest::get(format!("http://{proxy}/api/settings")).await.unwrap();
    let cookies: Vec<_> = response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    assert_eq!(cookies, ["session=abc; HttpOnly", "theme=dark"]);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let dead = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let proxy = start_proxy(&format!("http://{dead}"), 1024).await;

    let response = reqwest::get(format!("http://{proxy}/api/settings")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn oversized_body_is_rejected_before_forwarding() {
    let upstream = start_echo_upstream().await;
    let proxy = start_proxy(&upstream, 16).await;

    let response = reqwest::Client::new()
        .post(format!("http://{proxy}/api/settings/upload-avatar"))
        .body(vec![b'x'; 64])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn healthz_answers_without_upstream() {
    let proxy = start_proxy("http://127.0.0.1:9", 1024).await;
    let response = reqwest::get(format!("http://{proxy}/healthz")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}

#[test]
fn hop_by_hop_headers_are_dropped() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(header::COOKIE, HeaderValue::from_static("session=abc"));

    let request_side = forwardable(&headers, true);
    assert!(request_side.get(header::CONNECTION).is_none());
    assert!(request_side.get(header::HOST).is_none());
    assert!(request_side.get(header::CONTENT_LENGTH).is_none());
    assert_eq!(request_side.get(header::COOKIE).unwrap(), "session=abc");

    let response_side = forwardable(&headers, false);
    assert!(response_side.get(header::CONNECTION).is_none());
    assert_eq!(response_side.get(header::CONTENT_LENGTH).unwrap(), "12");
}
