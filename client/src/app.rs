//! Root application component with routing and context providers.

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{admin::AdminPage, login::LoginPage, user::UserPage};
use crate::state::api_key::ApiKeyHolder;
use crate::state::session::{LOGIN_PATH, SessionState};
use crate::util::credentials::BrowserCredentialStore;
use crate::util::guard::RequireSession;

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
/// Provides the session and API key holders, restores a persisted session
/// once the browser takes over, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let keys = RwSignal::new(ApiKeyHolder::default());

    provide_context(session);
    provide_context(keys);

    // Effects only run in the browser, so SSR and the first hydrated render
    // agree on an unrestored session.
    Effect::new(move || {
        session.update(|s| s.rehydrate(&BrowserCredentialStore));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/catalog-console.css"/>
        <Title text="Catalog Console"/>
        <ConsoleRouter/>
    }
}

/// Guarded admin area, also reached by any path below `/admin`.
#[component]
fn AdminArea() -> impl IntoView {
    view! {
        <RequireSession>
            <AdminPage/>
        </RequireSession>
    }
}

/// Guarded user area, also reached by any path below `/user`.
#[component]
fn UserArea() -> impl IntoView {
    view! {
        <RequireSession>
            <UserPage/>
        </RequireSession>
    }
}

/// Client-side routes. Expects the session and API key signals in context.
#[component]
pub fn ConsoleRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("admin") view=AdminArea/>
                <Route path=(StaticSegment("admin"), WildcardSegment("rest")) view=AdminArea/>
                <Route path=StaticSegment("user") view=UserArea/>
                <Route path=(StaticSegment("user"), WildcardSegment("rest")) view=UserArea/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
            </Routes>
        </Router>
    }
}
