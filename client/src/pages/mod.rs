//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own per-route state and compose components; `app` maps paths to
//! pages.

pub mod broadcast;
pub mod dashboard;
pub mod settings;
pub mod student_detail;
pub mod student_profile;
