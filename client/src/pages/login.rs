//! Login page: credentials plus an optional completion API key.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice_line::NoticeLine;
use crate::net::api::{CatalogApi, HttpCatalogApi};
use crate::net::error::ConsoleError;
use crate::net::types::{Credentials, LoginResponse};
use crate::state::api_key::ApiKeyHolder;
use crate::state::session::SessionState;
use crate::util::credentials::BrowserCredentialStore;

/// Trim the username and require both fields.
fn validate_login_input(username: &str, password: &str) -> Result<Credentials, ConsoleError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ConsoleError::ValidationGap("Enter both username and password."));
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Validate the form, then exchange the credentials for a token. Incomplete
/// input never reaches the backend.
async fn request_login<A: CatalogApi>(api: &A, username: &str, password: &str) -> Result<LoginResponse, ConsoleError> {
    let credentials = validate_login_input(username, password)?;
    leptos::logging::log!("login: requesting token for {}", credentials.username);
    api.obtain_token(&credentials).await
}

/// Store the optional key typed on the login form; blank input leaves the
/// store untouched.
fn remember_login_key(keys: &mut ApiKeyHolder, input: &str) {
    let input = input.trim();
    if !input.is_empty() {
        keys.set(input);
    }
}

/// Login page. On success the session is recorded and the browser moves to
/// the admin or user view according to the role flag.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let keys = expect_context::<RwSignal<ApiKeyHolder>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let api_key = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (user, pass) = (username.get_untracked(), password.get_untracked());
        if let Err(e) = validate_login_input(&user, &pass) {
            notice.set(Some(e.notice("Login")));
            return;
        }

        submitting.set(true);
        notice.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match request_login(&HttpCatalogApi, &user, &pass).await {
                Ok(resp) => {
                    let destination = session.try_update(|s| s.login(&BrowserCredentialStore, resp));
                    keys.update(|k| remember_login_key(k, &api_key.get_untracked()));
                    if let Some(destination) = destination {
                        leptos::logging::log!("login: navigating to {}", destination.path());
                        navigate(destination.path(), NavigateOptions::default());
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    notice.set(Some(e.notice("Login failed")));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h2>"Login"</h2>
            <form class="login-page__form" on:submit=on_submit>
                <label class="login-page__field">
                    "Username:"
                    <input
                        type="text"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__field">
                    "Password:"
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__field">
                    "OpenAI API Key (Optional):"
                    <input
                        type="text"
                        prop:value=move || api_key.get()
                        on:input=move |ev| api_key.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" prop:disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
            <NoticeLine notice=notice/>
        </div>
    }
}
