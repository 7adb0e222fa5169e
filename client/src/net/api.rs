//! Browser `AuthGateway` over the server's auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` and a popup window
//! for the interactive provider flow.
//! Server-side (SSR): stubs returning `Unreachable` since these calls are
//! only meaningful in the browser; SSR never runs session transitions.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a `GatewayError` so the store can surface it on the
//! session instead of panicking during hydration. The popup flow always
//! resolves: success, cancelled (popup closed), blocked, or timed out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use authgate::{AuthGateway, GatewayError, Identity, Provider};

pub const SESSION_ENDPOINT: &str = "/api/auth/me";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(any(test, feature = "hydrate"))]
const SIGN_IN_WINDOW_NAME: &str = "authgate-sign-in";
#[cfg(any(test, feature = "hydrate"))]
const SIGN_IN_WINDOW_FEATURES: &str = "popup,width=520,height=640";

pub const SIGN_IN_CANCELLED: &str = "sign-in cancelled";
pub const SIGN_IN_BLOCKED: &str = "sign-in popup blocked";
pub const SIGN_IN_TIMED_OUT: &str = "sign-in timed out";

/// Polling schedule for the popup sign-in flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignInPolling {
    pub interval_ms: u32,
    pub timeout_ms: u32,
}

impl Default for SignInPolling {
    fn default() -> Self {
        Self { interval_ms: 1_000, timeout_ms: 120_000 }
    }
}

impl SignInPolling {
    /// Number of polls before giving up. At least one.
    #[must_use]
    pub fn attempts(self) -> u32 {
        let interval = self.interval_ms.max(1);
        self.timeout_ms.div_ceil(interval).max(1)
    }
}

/// How a `/api/auth/me` status code should be read.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionLookup {
    Live,
    Missing,
    Failed,
}

#[cfg(any(test, feature = "hydrate"))]
fn session_lookup(status: u16) -> SessionLookup {
    match status {
        200..=299 => SessionLookup::Live,
        401 | 403 => SessionLookup::Missing,
        _ => SessionLookup::Failed,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn session_lookup_failed_message(status: u16) -> String {
    format!("session lookup failed: {status}")
}

/// Map a logout response status. A 401 means the session is already gone.
#[cfg(any(test, feature = "hydrate"))]
fn sign_out_result(status: u16) -> Result<(), GatewayError> {
    match status {
        200..=299 | 401 => Ok(()),
        400..=499 => Err(GatewayError::Rejected(format!("sign-out rejected: {status}"))),
        _ => Err(GatewayError::Unreachable(format!("sign-out failed: {status}"))),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_url(provider: Provider) -> String {
    format!("/auth/{}", provider.slug())
}

/// Gateway backed by the same-origin auth endpoints and cookie session.
#[derive(Clone, Debug, Default)]
pub struct BrowserGateway {
    polling: SignInPolling,
}

impl BrowserGateway {
    #[must_use]
    pub fn new(polling: SignInPolling) -> Self {
        Self { polling }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthGateway for BrowserGateway {
    async fn resolve_current_session(&self) -> Result<Option<Identity>, GatewayError> {
        #[cfg(feature = "hydrate")]
        {
            fetch_session().await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(not_available())
        }
    }

    async fn begin_interactive_sign_in(&self, provider: Provider) -> Result<Identity, GatewayError> {
        #[cfg(feature = "hydrate")]
        {
            popup_sign_in(provider, self.polling).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (provider, self.polling);
            Err(not_available())
        }
    }

    async fn sign_out(&self) -> Result<(), GatewayError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
                .send()
                .await
                .map_err(|e| GatewayError::Unreachable(e.to_string()))?;
            sign_out_result(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(not_available())
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn not_available() -> GatewayError {
    GatewayError::Unreachable("not available on server".to_owned())
}

/// `GET /api/auth/me` mapped to an optional identity.
#[cfg(feature = "hydrate")]
async fn fetch_session() -> Result<Option<Identity>, GatewayError> {
    let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
        .send()
        .await
        .map_err(|e| GatewayError::Unreachable(e.to_string()))?;
    match session_lookup(resp.status()) {
        SessionLookup::Live => {
            let user: super::types::User = resp
                .json()
                .await
                .map_err(|e| GatewayError::Unreachable(format!("malformed session payload: {e}")))?;
            Ok(Some(user.into()))
        }
        SessionLookup::Missing => Ok(None),
        SessionLookup::Failed => Err(GatewayError::Unreachable(session_lookup_failed_message(resp.status()))),
    }
}

/// Open the provider flow in a popup and poll the session endpoint until the
/// server has issued a session cookie.
#[cfg(feature = "hydrate")]
async fn popup_sign_in(provider: Provider, polling: SignInPolling) -> Result<Identity, GatewayError> {
    let window = web_sys::window().ok_or_else(|| GatewayError::Unreachable("no browser window".to_owned()))?;
    let popup = window
        .open_with_url_and_target_and_features(&sign_in_url(provider), SIGN_IN_WINDOW_NAME, SIGN_IN_WINDOW_FEATURES)
        .map_err(|_| GatewayError::Rejected(SIGN_IN_BLOCKED.to_owned()))?
        .ok_or_else(|| GatewayError::Rejected(SIGN_IN_BLOCKED.to_owned()))?;

    for _ in 0..polling.attempts() {
        gloo_timers::future::TimeoutFuture::new(polling.interval_ms).await;

        // Lookup errors mid-flow are transient; keep polling until a
        // terminal condition.
        if let Ok(Some(identity)) = fetch_session().await {
            close_popup(&popup);
            return Ok(identity);
        }

        if popup.closed().unwrap_or(true) {
            // The callback may land just before the popup closes itself.
            return match fetch_session().await {
                Ok(Some(identity)) => Ok(identity),
                _ => Err(GatewayError::Rejected(SIGN_IN_CANCELLED.to_owned())),
            };
        }
    }

    close_popup(&popup);
    Err(GatewayError::Unreachable(SIGN_IN_TIMED_OUT.to_owned()))
}

#[cfg(feature = "hydrate")]
fn close_popup(popup: &web_sys::Window) {
    if popup.close().is_err() {
        log::warn!("failed to close sign-in popup");
    }
}
