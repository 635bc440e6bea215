//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and display
//! formatting from page and component logic to improve reuse and testability.

pub mod format;
pub mod locale;
pub mod page_meta;
