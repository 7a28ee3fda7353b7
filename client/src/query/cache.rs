//! Keyed server-state cache with staleness, deduplication and invalidation.
//!
//! LIFECYCLE
//! =========
//! A key is *observed* while at least one mounted view reads it. A fetch is
//! due when the key is enabled, nothing is in flight for it, and either it was
//! invalidated or it has never produced data or an error. Time-based staleness
//! is checked when a new observer mounts and when a disabled query is enabled
//! again, so a view never refetches in a loop on its own. Invalidation marks entries stale and reports which keys
//! have observers and therefore refetch in the background; unobserved keys
//! refetch on their next mount.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;

use crate::net::error::ApiError;

/// Identifies one cached server response: operation plus parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    CurrentUser,
    MyStudentProfile,
    MySubjects,
    AvailableSubjects,
    Settings,
    StudentProfile(String),
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentUser => f.write_str("currentUser"),
            Self::MyStudentProfile => f.write_str("myStudentProfile"),
            Self::MySubjects => f.write_str("mySubjects"),
            Self::AvailableSubjects => f.write_str("availableSubjects"),
            Self::Settings => f.write_str("settings"),
            Self::StudentProfile(id) => write!(f, "studentProfile:{id}"),
        }
    }
}

/// Per-query fetch policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueryOptions {
    /// Age after which cached data is refetched on the next mount.
    pub stale_time_ms: f64,
    /// Extra attempts after a retryable failure. 0 disables retries.
    pub retry: u32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self { stale_time_ms: 0.0, retry: 0 }
    }
}

impl QueryOptions {
    #[must_use]
    pub fn with_stale_time(mut self, stale_time_ms: f64) -> Self {
        self.stale_time_ms = stale_time_ms;
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: u32) -> Self {
        self.retry = retry;
        self
    }
}

/// Upper bound on the delay between retries.
pub const MAX_RETRY_DELAY_MS: u32 = 30_000;

/// Whether a fetch that has failed `failures` times (1-based) should retry.
///
/// Client errors (4xx) and a missing transport are never retried.
pub fn should_retry(error: &ApiError, failures: u32, options: &QueryOptions) -> bool {
    if error.is_client_error() || matches!(error, ApiError::Unavailable) {
        return false;
    }
    failures <= options.retry
}

/// Exponential backoff: 1s, 2s, 4s ... capped at `MAX_RETRY_DELAY_MS`.
pub fn retry_delay_ms(failures: u32) -> u32 {
    let exponent = failures.saturating_sub(1).min(15);
    1000_u32.saturating_mul(1 << exponent).min(MAX_RETRY_DELAY_MS)
}

/// Render state of a query as seen by a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never fetched (usually disabled).
    Idle,
    /// First fetch in flight, no data yet.
    Loading,
    /// Data available (a background refetch may be running).
    Success,
    /// Last fetch failed.
    Error,
}

#[derive(Clone, Debug, Default)]
struct QueryEntry {
    data: Option<serde_json::Value>,
    error: Option<ApiError>,
    fetched_at: Option<f64>,
    in_flight: bool,
    invalidated: bool,
    observers: usize,
    fetch_count: u32,
}

impl QueryEntry {
    /// Data past its stale time, or a failure, needs a fresh fetch.
    fn needs_refresh(&self, options: QueryOptions, now_ms: f64) -> bool {
        let stale = self.fetched_at.is_some_and(|at| now_ms - at >= options.stale_time_ms);
        stale || self.error.is_some()
    }
}

#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, QueryEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mounted reader. Data older than `stale_time_ms`, or a
    /// previous failure, is marked for refetch.
    pub fn observe(&mut self, key: &QueryKey, options: QueryOptions, now_ms: f64) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.observers += 1;
        if entry.needs_refresh(options, now_ms) {
            entry.invalidated = true;
        }
    }

    /// A mounted query's `enabled` flag went from false to true. Same rule as
    /// `observe`: stale data or a previous failure is marked for refetch.
    pub fn enable(&mut self, key: &QueryKey, options: QueryOptions, now_ms: f64) {
        if let Some(entry) = self.entries.get_mut(key) {
            if entry.needs_refresh(options, now_ms) {
                entry.invalidated = true;
            }
        }
    }

    pub fn unobserve(&mut self, key: &QueryKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.observers = entry.observers.saturating_sub(1);
        }
    }

    pub fn observers(&self, key: &QueryKey) -> usize {
        self.entries.get(key).map_or(0, |e| e.observers)
    }

    pub fn should_fetch(&self, key: &QueryKey, enabled: bool) -> bool {
        if !enabled {
            return false;
        }
        self.entries.get(key).map_or(true, |e| {
            !e.in_flight && (e.invalidated || (e.data.is_none() && e.error.is_none()))
        })
    }

    /// Mark a fetch as started. Returns `false` if one is already in flight,
    /// in which case the caller must not issue another request.
    pub fn begin_fetch(&mut self, key: &QueryKey) -> bool {
        let entry = self.entries.entry(key.clone()).or_default();
        if entry.in_flight {
            return false;
        }
        entry.in_flight = true;
        entry.invalidated = false;
        true
    }

    /// Record a fetch result. Errors keep previously cached data.
    pub fn finish_fetch(&mut self, key: &QueryKey, result: Result<serde_json::Value, ApiError>, now_ms: f64) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.in_flight = false;
        entry.fetch_count += 1;
        match result {
            Ok(data) => {
                entry.data = Some(data);
                entry.error = None;
                entry.fetched_at = Some(now_ms);
            }
            Err(err) => entry.error = Some(err),
        }
    }

    /// Overwrite cached data after a mutation that returned the new value.
    pub fn set_data(&mut self, key: &QueryKey, data: serde_json::Value, now_ms: f64) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.data = Some(data);
        entry.error = None;
        entry.fetched_at = Some(now_ms);
    }

    /// Mark `keys` stale. Returns the keys that have mounted observers and
    /// will therefore refetch now.
    pub fn invalidate(&mut self, keys: &[QueryKey]) -> Vec<QueryKey> {
        let mut refetch = Vec::new();
        for key in keys {
            let Some(entry) = self.entries.get_mut(key) else {
                continue;
            };
            entry.invalidated = true;
            if entry.observers > 0 && !refetch.contains(key) {
                refetch.push(key.clone());
            }
        }
        refetch
    }

    pub fn data(&self, key: &QueryKey) -> Option<&serde_json::Value> {
        self.entries.get(key).and_then(|e| e.data.as_ref())
    }

    /// Decode cached data. A shape mismatch reads as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        self.data(key).and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn error(&self, key: &QueryKey) -> Option<&ApiError> {
        self.entries.get(key).and_then(|e| e.error.as_ref())
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.entries.get(key).is_some_and(|e| e.in_flight)
    }

    /// Completed fetches (successful or not) for `key`.
    pub fn fetch_count(&self, key: &QueryKey) -> u32 {
        self.entries.get(key).map_or(0, |e| e.fetch_count)
    }

    pub fn status(&self, key: &QueryKey) -> QueryStatus {
        let Some(entry) = self.entries.get(key) else {
            return QueryStatus::Idle;
        };
        if entry.in_flight && entry.data.is_none() {
            QueryStatus::Loading
        } else if entry.error.is_some() {
            QueryStatus::Error
        } else if entry.data.is_some() {
            QueryStatus::Success
        } else {
            QueryStatus::Idle
        }
    }
}
