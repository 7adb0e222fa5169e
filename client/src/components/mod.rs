//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared session from Leptos context and never keep a
//! private copy of it.

pub mod auth_error;
pub mod protected;
pub mod toolbar;
