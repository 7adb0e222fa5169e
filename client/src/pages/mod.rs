//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Gating lives in `components::protected`, never in a page.

pub mod dashboard;
pub mod login;
