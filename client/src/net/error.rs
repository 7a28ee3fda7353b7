//! Failure taxonomy for REST calls.
//!
//! Variants carry owned strings so errors can be stored in reactive state and
//! cloned into views.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message} (status {status})")]
    Http { status: u16, message: String },
    /// A 2xx body could not be decoded into the expected type.
    #[error("invalid response: {0}")]
    Decode(String),
    /// No browser transport (server-side render or native tests).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the session is missing or lacks permission.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// True for 4xx responses; these are never retried.
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Message suitable for inline display.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
