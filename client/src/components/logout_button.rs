//! Logout control shared by the admin and user views.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::credentials::BrowserCredentialStore;

/// Clears the session; the surrounding route guard then redirects to login.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_click = move |_| {
        session.update(|s| s.logout(&BrowserCredentialStore));
        leptos::logging::log!("session cleared");
    };

    view! {
        <button class="btn btn--outlined" on:click=on_click>
            "Logout"
        </button>
    }
}
