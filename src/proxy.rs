//! Same-origin forwarding to the attendance backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client calls relative paths (`/api/...`, `/students/...`) with
//! `credentials: include`. Forwarding them through this host keeps the
//! backend's session cookie first-party. Requests and responses are passed
//! through unchanged apart from hop-by-hop headers.

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::config::HostConfig;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
    #[error("upstream unavailable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}

// =============================================================================
// State
// =============================================================================

#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream_url: String,
    max_body_bytes: usize,
}

impl ProxyState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client, upstream_url: config.upstream_url.clone(), max_body_bytes: config.max_body_bytes })
    }

    fn target(&self, uri: &Uri) -> String {
        let path = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
        format!("{}{path}", self.upstream_url)
    }
}

// =============================================================================
// Handler
// =============================================================================

/// Headers that describe a single connection and must not be forwarded.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Copy end-to-end headers. `Host` and `Content-Length` are dropped on the
/// request side; the client recomputes them for the upstream.
fn forwardable(headers: &HeaderMap, request_side: bool) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) {
            continue;
        }
        if request_side && (name == header::HOST || name == header::CONTENT_LENGTH) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers.get(header::CONTENT_LENGTH)?.to_str().ok()?.parse().ok()
}

/// Forward the request to `API_UPSTREAM_URL` and relay the response.
///
/// # Errors
///
/// `BodyTooLarge` (413) when the request body exceeds the configured limit;
/// `Upstream` (502) when the backend cannot be reached.
pub async fn forward(State(state): State<ProxyState>, req: Request) -> Result<Response, ProxyError> {
    let limit = state.max_body_bytes;
    if declared_length(req.headers()).is_some_and(|len| len > limit) {
        return Err(ProxyError::BodyTooLarge { limit });
    }

    let (parts, body) = req.into_parts();
    let body: Bytes = axum::body::to_bytes(body, limit).await.map_err(|_| ProxyError::BodyTooLarge { limit })?;
    let target = state.target(&parts.uri);

    let upstream = state
        .client
        .request(parts.method.clone(), &target)
        .headers(forwardable(&parts.headers, true))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(method = %parts.method, %target, error = %e, "upstream request failed");
            e
        })?;

    let status = upstream.status();
    let headers = forwardable(upstream.headers(), false);
    let bytes = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, %target, %status, "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
