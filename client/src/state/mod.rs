//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own request orchestration; these plain structs hold the data and the
//! transition rules so they can be unit-tested without a browser.

pub mod comments;
pub mod product_form;
pub mod ui;
