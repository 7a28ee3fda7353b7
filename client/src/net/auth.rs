//! Session identity.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::{Body, Method, request};
use super::error::ApiError;
use super::types::CurrentUser;

pub(crate) const CURRENT_USER_PATH: &str = "/api/auth/me";

/// `GET /api/auth/me` for whoever owns the session cookie.
///
/// # Errors
///
/// Returns `Http { status: 401 }` without a session; otherwise propagates the
/// request error.
pub async fn fetch_current_user() -> Result<CurrentUser, ApiError> {
    request(Method::Get, CURRENT_USER_PATH, Body::Empty).await
}
