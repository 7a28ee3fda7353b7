//! Browser `localStorage` access for session-adjacent data.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow stores the signed-in user as JSON under `user`; the header
//! reads it to greet the user without a network round trip.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

pub const USER_STORAGE_KEY: &str = "user";

/// The subset of the stored user the shell displays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StoredUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl StoredUser {
    /// `name`, else `email`, else `Guest`. Blank values count as missing.
    pub fn display_name(user: Option<&Self>) -> String {
        user.and_then(|u| {
            [u.name.as_deref(), u.email.as_deref()]
                .into_iter()
                .flatten()
                .map(str::trim)
                .find(|s| !s.is_empty())
        })
        .unwrap_or("Guest")
        .to_owned()
    }
}

/// Decode stored JSON; malformed data reads as absent.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

/// Load and decode the JSON stored under `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        let parsed = parse_json(&raw);
        if parsed.is_none() {
            log::warn!("ignoring malformed localStorage entry {key}");
        }
        parsed
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

pub fn load_user() -> Option<StoredUser> {
    load_json(USER_STORAGE_KEY)
}
