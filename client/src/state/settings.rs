//! Teacher settings form state.
//!
//! DESIGN
//! ======
//! The settings document is free-form JSON, so the form edits a draft copy of
//! the whole document and only touches the `profile` keys it knows about.
//! Saving replaces the stored document with the draft, preserving keys the
//! form never displays.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde_json::{Map, Value};

use crate::net::error::ApiError;
use crate::net::settings::validate_avatar_file_name;
use crate::net::types::{AvatarUpload, Settings};

pub const SAVE_ERROR: &str = "Failed to save settings";
pub const UPLOAD_ERROR: &str = "Failed to upload avatar";

/// Profile keys the form edits, as `(key, label)`. `email` is shown read-only.
pub const EDITABLE_FIELDS: [(&str, &str); 3] = [("name", "Name"), ("phone", "Phone"), ("department", "Department")];

/// Read `profile.<field>` as text. Missing or non-string values read as empty.
pub fn profile_field(doc: &Settings, field: &str) -> String {
    doc.get("profile")
        .and_then(|p| p.get(field))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

pub fn avatar_url(doc: &Settings) -> Option<String> {
    Some(profile_field(doc, "avatarUrl")).filter(|url| !url.is_empty())
}

fn set_profile_field(doc: &mut Settings, field: &str, value: String) {
    if !doc.is_object() {
        *doc = Value::Object(Map::new());
    }
    let Some(root) = doc.as_object_mut() else {
        return;
    };
    let profile = root.entry("profile").or_insert_with(|| Value::Object(Map::new()));
    if !profile.is_object() {
        *profile = Value::Object(Map::new());
    }
    if let Some(profile) = profile.as_object_mut() {
        profile.insert(field.to_owned(), Value::String(value));
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsState {
    pub draft: Settings,
    /// The draft has edits not yet saved.
    pub dirty: bool,
    pub saving: bool,
    pub uploading: bool,
    pub error: Option<String>,
}

impl SettingsState {
    /// Adopt a freshly loaded document unless the user is mid-edit.
    pub fn sync(&mut self, doc: &Settings) {
        if !self.dirty {
            self.draft = doc.clone();
        }
    }

    pub fn field(&self, field: &str) -> String {
        profile_field(&self.draft, field)
    }

    pub fn set_field(&mut self, field: &str, value: String) {
        set_profile_field(&mut self.draft, field, value);
        self.dirty = true;
    }

    /// Document to send with `PUT`, or `None` while a save is in flight.
    pub fn begin_save(&mut self) -> Option<Settings> {
        if self.saving {
            return None;
        }
        self.saving = true;
        self.error = None;
        Some(self.draft.clone())
    }

    /// On success the server echo becomes the draft. On failure the draft is
    /// kept for another attempt.
    pub fn finish_save(&mut self, result: Result<Settings, ApiError>) {
        self.saving = false;
        match result {
            Ok(saved) => {
                self.draft = saved;
                self.dirty = false;
            }
            Err(_) => self.error = Some(SAVE_ERROR.to_owned()),
        }
    }

    /// Validate the picked file before any request.
    ///
    /// # Errors
    ///
    /// Returns the rejection text for unsupported extensions or while another
    /// upload is running.
    pub fn begin_upload(&mut self, file_name: &str) -> Result<(), &'static str> {
        if self.uploading {
            return Err("Upload already in progress");
        }
        if let Err(reason) = validate_avatar_file_name(file_name) {
            self.error = Some(reason.to_owned());
            return Err(reason);
        }
        self.uploading = true;
        self.error = None;
        Ok(())
    }

    /// Apply an upload result. On success returns the server's settings
    /// document for the cache; unsaved edits in the draft are kept and only
    /// the avatar URL is taken from the response.
    pub fn finish_upload(&mut self, result: Result<AvatarUpload, ApiError>) -> Option<Settings> {
        self.uploading = false;
        match result {
            Ok(upload) => {
                if self.dirty {
                    set_profile_field(&mut self.draft, "avatarUrl", upload.avatar_url);
                } else if upload.settings.is_object() {
                    self.draft = upload.settings.clone();
                } else {
                    set_profile_field(&mut self.draft, "avatarUrl", upload.avatar_url);
                }
                Some(upload.settings)
            }
            Err(err) => {
                self.error = Some(match err {
                    ApiError::Http { status: 400, message } if !message.is_empty() => message,
                    _ => UPLOAD_ERROR.to_owned(),
                });
                None
            }
        }
    }
}
