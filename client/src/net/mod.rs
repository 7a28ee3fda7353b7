//! Networking modules for the attendance REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the single request/response contract, `error` the failure
//! taxonomy, and `types` the wire schema. `auth`, `schedule`, `students` and
//! `settings` are thin per-resource accessors on top of `api::request`.

pub mod api;
pub mod auth;
pub mod error;
pub mod schedule;
pub mod settings;
pub mod students;
pub mod types;
