//! Shared client-side view state.
//!
//! DESIGN
//! ======
//! State is split by page (`exams`, `profile`, `broadcast`, `settings`) plus
//! the shell (`ui`). Each model is a plain struct with pure transition
//! methods; components keep it in an `RwSignal` and render from snapshots.

pub mod broadcast;
pub mod exams;
pub mod profile;
pub mod settings;
pub mod ui;
