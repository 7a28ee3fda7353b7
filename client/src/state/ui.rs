//! Shell chrome state (navigation menu, theme).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the page models so the header
//! can evolve independently of server data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::error::ApiError;
use crate::net::types::CurrentUser;
use crate::query::cache::QueryOptions;
use crate::util::storage::StoredUser;
use crate::util::theme::Theme;

/// The signed-in user rarely changes within a session.
pub const CURRENT_USER_STALE_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Current-user query policy: cached for five minutes, never retried since
/// failures are almost always a missing session.
pub fn current_user_options() -> QueryOptions {
    QueryOptions::default().with_stale_time(CURRENT_USER_STALE_MS).with_retry(0)
}

/// Header greeting. The server's answer wins; a rejected session means
/// "Guest" even if an old login is still in `localStorage`.
pub fn display_name(current: Option<&CurrentUser>, error: Option<&ApiError>, stored: Option<&StoredUser>) -> String {
    if let Some(label) = current.and_then(CurrentUser::label) {
        return label.to_owned();
    }
    if error.is_some_and(ApiError::is_unauthorized) {
        return StoredUser::display_name(None);
    }
    StoredUser::display_name(stored)
}

/// Header navigation as `(path, label)`.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Dashboard"),
    ("/broadcast", "Broadcast"),
    ("/student/profile", "Profile"),
    ("/settings", "Settings"),
];

/// Exact path match; `/broadcast/` does not activate `/broadcast`.
pub fn is_active(current: &str, link: &str) -> bool {
    current == link
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub menu_open: bool,
    path: String,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Record the current route. The mobile menu closes when it changes.
    pub fn navigated(&mut self, path: &str) {
        if self.path != path {
            self.path = path.to_owned();
            self.menu_open = false;
        }
    }

    /// Flip the theme and return the new value for persisting.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
