//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, saving, request
//! bookkeeping) and delegates rendering details to `components`.

pub mod comments;
pub mod product_edit;
