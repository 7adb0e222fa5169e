//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Session state is owned by `authgate::SessionStore`; this layer only
//! mirrors it into reactive signals for components.

pub mod auth;
