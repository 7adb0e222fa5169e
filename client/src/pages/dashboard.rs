//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrapped in `Protected` by the router, so the body only renders for a
//! signed-in user. Sign-out from the toolbar flips the guard, which then
//! performs the redirect.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use authgate::Identity;
use leptos::prelude::*;

use crate::components::auth_error::AuthErrorBanner;
use crate::components::toolbar::Toolbar;
use crate::state::auth::use_auth;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();
    let on_refresh = {
        let auth = auth.clone();
        move |_| auth.refresh()
    };

    view! {
        <div class="dashboard-page">
            <Toolbar/>
            <AuthErrorBanner/>
            <section class="dashboard-card">
                <h1>{move || greeting(user.get().as_ref())}</h1>
                <Show when=move || user.with(|u| u.as_ref().and_then(|u| u.email.clone()).is_some())>
                    <p class="dashboard-card__email">
                        {move || user.with(|u| u.as_ref().and_then(|u| u.email.clone()).unwrap_or_default())}
                    </p>
                </Show>
                <button class="btn" on:click=on_refresh>"Refresh session"</button>
            </section>
        </div>
    }
}

fn greeting(user: Option<&Identity>) -> String {
    match user {
        Some(user) => format!("Welcome, {}", user.label()),
        None => "Welcome".to_owned(),
    }
}
