//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! These mirror the server's `/api/auth/me` payload. They are converted into
//! `authgate::Identity` at the gateway boundary so nothing past the gateway
//! depends on the wire shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use authgate::Identity;
use serde::{Deserialize, Serialize};

/// Current user as returned by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address, when the provider shared one.
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Authentication method used to create the session (e.g. `"google"`).
    #[serde(default = "default_auth_method")]
    pub auth_method: String,
}

fn default_auth_method() -> String {
    "session".to_owned()
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email.filter(|e| !e.trim().is_empty()),
            display_name: Some(user.name).filter(|n| !n.trim().is_empty()),
            avatar_url: user.avatar_url,
        }
    }
}
