//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical gating: placeholder while the
//! session is undecided or a transition is in flight, a single redirect on
//! entering the unauthenticated state, protected content otherwise.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;

use authgate::{GuardState, GuardView, RouteGuard, Session};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Install the route guard effect and return the view the route should render.
///
/// `current_path` is read untracked on each evaluation so the guard can skip
/// redirecting when the route is already the redirect target.
pub fn install_route_guard<P, F>(
    session: ReadSignal<Session>,
    redirect_target: String,
    current_path: P,
    navigate: F,
) -> Memo<GuardView>
where
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let guard = RefCell::new(RouteGuard::new(redirect_target));
    Effect::new(move || {
        let target = session.with(|s| observe(&guard, s, &current_path()));
        if let Some(target) = target {
            navigate(&target, redirect_options());
        }
    });

    Memo::new(move |_| session.with(|s| GuardState::evaluate(s).view()))
}

/// Feed one session value through the guard, returning a redirect target on
/// entry into the unauthenticated state.
fn observe(guard: &RefCell<RouteGuard>, session: &Session, current_path: &str) -> Option<String> {
    guard.borrow_mut().observe(session, current_path).redirect
}

/// Redirects replace the history entry so "back" does not land on the
/// protected route and bounce again.
fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
