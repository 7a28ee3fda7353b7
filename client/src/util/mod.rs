//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, dialogs,
//! clocks, theme) from page and component logic so the logic stays testable
//! natively.

pub mod clock;
pub mod dates;
pub mod dialog;
pub mod lifetime;
pub mod storage;
pub mod theme;
