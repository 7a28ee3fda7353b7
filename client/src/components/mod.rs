//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from state snapshots and dispatch work through the
//! `net` accessors or page-provided callbacks; decisions live in `state`.

pub mod broadcast_form;
pub mod broadcast_preview;
pub mod exam_days_modal;
pub mod header;
pub mod profile_card;
pub mod subject_attendance_card;
