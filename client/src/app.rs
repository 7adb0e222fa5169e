//! Root application component with routing and context providers.

use std::sync::Arc;

use authgate::{SessionConfig, SessionStore};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::net::api::BrowserGateway;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::auth::provide_auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the single session store, mirrors it into context, and starts the
/// one-time session initialization when hydrating in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new(Arc::new(BrowserGateway::default()), SessionConfig::default());
    let auth = provide_auth(store);
    auth.initialize();

    view! {
        <Stylesheet id="leptos" href="/pkg/authgate-ui.css"/>
        <Title text="Sign in"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Protected><DashboardPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
