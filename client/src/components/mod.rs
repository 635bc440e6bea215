//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the moderation list and the product editor. They read
//! shared state from Leptos context or take signals and callbacks as props;
//! none of them talk to the network.

pub mod comment_card;
pub mod comment_filter_bar;
pub mod form_field;
pub mod product_editor;
pub mod product_preview;
pub mod product_sections;
pub mod product_tabs;
