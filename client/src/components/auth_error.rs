//! Dismissible banner for the last failed sign-in or sign-out.

use leptos::prelude::*;

use crate::state::auth::{error_banner, use_auth};

#[component]
pub fn AuthErrorBanner() -> impl IntoView {
    let auth = use_auth();
    let session = auth.session;
    let message = move || session.with(error_banner);

    view! {
        <Show when=move || message().is_some()>
            <div class="auth-error" role="alert">
                <span class="auth-error__text">{move || message().unwrap_or_default()}</span>
                <button
                    class="btn auth-error__dismiss"
                    title="Dismiss"
                    on:click={
                        let auth = auth.clone();
                        move |_| auth.clear_error()
                    }
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
