//! Unified REST request helper for the attendance backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sent with
//! browser-managed credentials so the session cookie travels with every call.
//! Server-side (SSR) and native tests: the transport is absent and `request`
//! returns `ApiError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Http` carrying the status and the
//! backend's own message (FastAPI `detail` when present). Callers decide how to
//! surface the failure; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Prefix prepended to every request path. Empty: requests go to the page
/// origin, where the host process forwards them to the backend.
pub const API_BASE: &str = "";

/// HTTP verbs used by the accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Request payload.
pub enum Body {
    Empty,
    Json(serde_json::Value),
    /// Multipart form; the browser supplies the boundary header.
    #[cfg(feature = "hydrate")]
    Multipart(web_sys::FormData),
}

impl Body {
    /// Serialize `value` as a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the value cannot be represented as JSON.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Multipart field name the backend's upload routes read.
pub const FILE_FIELD: &str = "file";

/// Wrap a picked file in a `FormData` under `FILE_FIELD`, keeping its name so
/// the server can check the extension.
///
/// # Errors
///
/// Returns `ApiError::Network` if the browser refuses to build the form.
#[cfg(feature = "hydrate")]
pub fn file_form(file: &web_sys::File) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data unavailable".to_owned()))?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
    Ok(form)
}

pub(crate) fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

pub(crate) fn request_line(method: Method, path: &str) -> String {
    format!("{} {}", method.as_str(), endpoint(path))
}

/// Extract a human-readable message from an error response body.
///
/// Looks for FastAPI's `detail` (a string, or a list of `{msg}` objects),
/// then `message`, then `error`. Falls back to `request failed: <status>`.
pub fn error_message_from_body(status: u16, body: &str) -> String {
    let fallback = || format!("request failed: {status}");
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return fallback();
    };

    match value.get("detail") {
        Some(serde_json::Value::String(detail)) if !detail.is_empty() => return detail.clone(),
        Some(serde_json::Value::Array(items)) => {
            let joined = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return joined;
            }
        }
        _ => {}
    }

    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .filter(|s| !s.is_empty())
        .map_or_else(fallback, str::to_owned)
}

/// Decode a 2xx body. An empty body decodes as JSON `null`.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the text is not valid JSON for `T`.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let trimmed = text.trim();
    let source = if trimmed.is_empty() { "null" } else { trimmed };
    serde_json::from_str(source).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Issue a credentialed request and decode the JSON response.
///
/// # Errors
///
/// Returns `Network` on transport failure, `Http` on a non-2xx status,
/// `Decode` on an unexpected body and `Unavailable` outside the browser.
pub async fn request<T: DeserializeOwned>(method: Method, path: &str, body: Body) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = endpoint(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .credentials(web_sys::RequestCredentials::Include);

        let req = match body {
            Body::Empty => builder.build(),
            Body::Json(value) => builder.json(&value),
            Body::Multipart(form) => builder.body(form),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        log::debug!("{}", request_line(method, path));
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Http { status, message: error_message_from_body(status, &text) });
        }
        decode_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}
