//! Teacher settings accessors on the `/api/settings` family.
//!
//! The settings document is free-form JSON. `replace_settings` sends the whole
//! document back with `PUT`.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use super::api::{Body, Method, request};
use super::error::ApiError;
use super::types::Settings;

pub(crate) const SETTINGS_PATH: &str = "/api/settings";
pub(crate) const AVATAR_UPLOAD_PATH: &str = "/api/settings/upload-avatar";

/// Extensions the avatar route accepts.
pub const AVATAR_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".webp"];

/// Check a picked file name against `AVATAR_EXTENSIONS` (case-insensitive).
///
/// # Errors
///
/// Returns `"Unsupported file type"` for any other extension.
pub fn validate_avatar_file_name(name: &str) -> Result<(), &'static str> {
    let lower = name.to_ascii_lowercase();
    let ext = lower.rfind('.').map(|idx| &lower[idx..]);
    match ext {
        Some(ext) if AVATAR_EXTENSIONS.contains(&ext) => Ok(()),
        _ => Err("Unsupported file type"),
    }
}

/// `GET /api/settings`.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn fetch_settings() -> Result<Settings, ApiError> {
    request(Method::Get, SETTINGS_PATH, Body::Empty).await
}

/// `PUT /api/settings`; the server stores exactly `settings`.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn replace_settings(settings: &Settings) -> Result<Settings, ApiError> {
    request(Method::Put, SETTINGS_PATH, Body::Json(settings.clone())).await
}

/// `POST /api/settings/upload-avatar`.
///
/// # Errors
///
/// Returns `Http { status: 400 }` for unsupported file types; otherwise
/// propagates the request error.
#[cfg(feature = "hydrate")]
pub async fn upload_avatar(file: web_sys::File) -> Result<super::types::AvatarUpload, ApiError> {
    let form = super::api::file_form(&file)?;
    request(Method::Post, AVATAR_UPLOAD_PATH, Body::Multipart(form)).await
}
