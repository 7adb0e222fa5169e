//! Networking modules for the auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the browser `AuthGateway`; `types` defines the wire
//! schema it decodes.

pub mod api;
pub mod types;
