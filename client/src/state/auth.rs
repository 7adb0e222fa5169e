//! Auth-session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The `SessionStore` is the only
//! writer; `AuthContext::session` is a read-only mirror so every component
//! tree reads the same value.
//!
//! MIRRORING
//! =========
//! A store subscription alone would coalesce: a transition that claims and
//! settles within one scheduler tick would never show `loading` to the
//! guard. Dispatchers therefore copy the store into the signal themselves,
//! once right after the transition claims the in-flight slot and once after
//! it settles. The subscription loop covers mutations made elsewhere.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use authgate::{Identity, Provider, Session, SessionStore};
use leptos::prelude::*;

/// Session signal plus bound dispatchers, provided via context.
#[derive(Clone)]
pub struct AuthContext {
    /// Mirror of the store's session.
    pub session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
    store: SessionStore,
}

/// Create the session mirror for `store` and provide it to child components.
pub fn provide_auth(store: SessionStore) -> AuthContext {
    let (session, set_session) = signal(store.snapshot());

    #[cfg(feature = "hydrate")]
    {
        let mut subscription = store.subscribe();
        leptos::task::spawn_local(async move {
            while let Some(next) = subscription.changed().await {
                set_session.maybe_update(|current| replace_if_changed(current, next));
            }
        });
    }

    let ctx = AuthContext { session, set_session, store };
    provide_context(ctx.clone());
    ctx
}

/// Session hook for components. Panics if `provide_auth` was not called by
/// an ancestor, like any missing Leptos context.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

impl AuthContext {
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Session::is_authenticated))
    }

    pub fn user(&self) -> Signal<Option<Identity>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.user.clone()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.error.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.loading))
    }

    /// Copy the store's current session into the signal if it differs.
    pub fn sync(&self) {
        mirror(&self.store, self.set_session);
    }

    /// Resolve the initial session. Browser only; SSR renders undecided.
    pub fn initialize(&self) {
        #[cfg(feature = "hydrate")]
        {
            let initializer = authgate::SessionInitializer::new(self.store.clone());
            self.dispatch("initialize", async move { initializer.run_until_ready().await });
        }
    }

    /// Start the interactive sign-in with the configured provider.
    pub fn sign_in(&self) {
        self.sign_in_with(self.store.config().provider);
    }

    pub fn sign_in_with(&self, provider: Provider) {
        #[cfg(feature = "hydrate")]
        {
            let store = self.store.clone();
            self.dispatch("sign_in", async move { store.request_sign_in_with(provider).await });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = provider;
        }
    }

    pub fn sign_out(&self) {
        #[cfg(feature = "hydrate")]
        {
            let store = self.store.clone();
            self.dispatch("sign_out", async move { store.request_sign_out().await });
        }
    }

    pub fn refresh(&self) {
        #[cfg(feature = "hydrate")]
        {
            let store = self.store.clone();
            self.dispatch("refresh", async move { store.request_refresh().await });
        }
    }

    pub fn clear_error(&self) {
        self.store.clear_error();
        self.sync();
    }

    /// Run `transition` on the local executor, mirroring the store as soon as
    /// it has claimed the in-flight slot and again once it settles.
    #[cfg(feature = "hydrate")]
    fn dispatch<F>(&self, name: &'static str, transition: F)
    where
        F: std::future::Future + 'static,
        F::Output: std::fmt::Debug,
    {
        let store = self.store.clone();
        let set_session = self.set_session;
        leptos::task::spawn_local(async move {
            // `join!` polls left to right, so the transition's first poll
            // (which claims the slot) runs before the mirror.
            let (outcome, ()) = futures::join!(transition, async { mirror(&store, set_session) });
            mirror(&store, set_session);
            tracing::debug!(transition = name, ?outcome, "auth dispatch settled");
        });
    }
}

fn mirror(store: &SessionStore, set_session: WriteSignal<Session>) {
    let next = store.snapshot();
    set_session.maybe_update(|current| replace_if_changed(current, next));
}

/// Overwrite `current` with `next`, reporting whether anything changed so
/// unchanged snapshots do not re-run effects.
fn replace_if_changed(current: &mut Session, next: Session) -> bool {
    if *current == next {
        return false;
    }
    *current = next;
    true
}

/// Text for the header badge: the user's label, or an empty string.
pub fn user_badge(session: &Session) -> String {
    session
        .user
        .as_ref()
        .map_or_else(String::new, |u| u.label().to_owned())
}

/// Message shown for the last failed transition, if any.
pub fn error_banner(session: &Session) -> Option<String> {
    session
        .error
        .as_ref()
        .filter(|e| !e.trim().is_empty())
        .map(|e| format!("Authentication problem: {e}"))
}
