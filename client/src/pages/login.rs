//! Login page offering the configured identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page never navigates on its own during a sign-in; it waits for the
//! session store to report an authenticated user and then leaves for the
//! landing route.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use authgate::{Provider, Session};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_error::AuthErrorBanner;
use crate::state::auth::use_auth;

/// Route the login page sends an authenticated user to.
pub const LANDING_ROUTE: &str = "/";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let session = auth.session;
    let loading = auth.loading();
    let busy = move || session.with(sign_in_blocked);
    let provider = auth.store().config().provider;
    let navigate = use_navigate();

    Effect::new(move || {
        if session.with(should_leave_login) {
            navigate(LANDING_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_sign_in = {
        let auth = auth.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            auth.sign_in();
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">{sign_in_caption(provider)}</p>
                <AuthErrorBanner/>
                <button
                    class="login-button"
                    on:click=on_sign_in
                    disabled=busy
                >
                    {move || sign_in_label(provider, loading.get())}
                </button>
            </div>
        </div>
    }
}

/// The store refuses sign-in until the first resolution and while another
/// transition is in flight.
fn sign_in_blocked(session: &Session) -> bool {
    !session.initialized || session.loading
}

/// True once the session is settled with a user present.
fn should_leave_login(session: &Session) -> bool {
    session.initialized && !session.loading && session.is_authenticated()
}

fn sign_in_caption(provider: Provider) -> String {
    format!("Continue with your {} account.", provider.display_name())
}

fn sign_in_label(provider: Provider, loading: bool) -> String {
    if loading {
        "Signing in...".to_owned()
    } else {
        format!("Sign in with {}", provider.display_name())
    }
}
