//! Top bar with the signed-in user and sign-out control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-out goes through the session store; the route guard on the page
//! performs the redirect once the store reports the user gone.

use leptos::prelude::*;

use crate::state::auth::{use_auth, user_badge};

#[component]
pub fn Toolbar() -> impl IntoView {
    let auth = use_auth();
    let session = auth.session;
    let loading = auth.loading();
    let badge = move || session.with(user_badge);

    let on_sign_out = {
        let auth = auth.clone();
        move |_| auth.sign_out()
    };

    view! {
        <div class="toolbar">
            <a href="/" class="toolbar__home">"Home"</a>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">{badge}</span>
            <button class="btn toolbar__sign-out" on:click=on_sign_out disabled=move || loading.get()>
                "Sign out"
            </button>
        </div>
    }
}
