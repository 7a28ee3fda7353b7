//! Server-state cache for REST resources.
//!
//! DESIGN
//! ======
//! `cache` is a plain keyed store with no reactive or browser dependencies so
//! staleness, deduplication and invalidation rules are testable natively.
//! `client` wraps it in a page-scoped Leptos signal and provides the
//! `use_query` / `run_mutation` helpers that pages call.

pub mod cache;
pub mod client;
