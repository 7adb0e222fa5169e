//! Route guard wrapper for protected content.

use authgate::GuardView;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::use_auth;
use crate::util::auth::install_route_guard;

/// Renders `children` only for an authenticated session.
///
/// Shows a placeholder while the session is undecided or a sign-in/out is in
/// flight, and redirects once to the configured sign-in route when the
/// session turns out to be unauthenticated.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();
    let target = auth.store().config().redirect_target.clone();

    let guard_view = install_route_guard(
        auth.session,
        target,
        move || location.pathname.get_untracked(),
        navigate,
    );

    view! {
        {move || match guard_view.get() {
            GuardView::Placeholder => {
                view! { <div class="auth-pending">"Checking session..."</div> }.into_any()
            }
            GuardView::Protected => children().into_any(),
            GuardView::Denied => ().into_any(),
        }}
    }
}
