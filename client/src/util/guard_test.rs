use super::*;
use crate::net::api::fake::RecordingApi;
use crate::net::types::LoginResponse;
use crate::state::catalog::{load_admin, load_user};
use crate::util::credentials::MemoryCredentialStore;

fn anonymous() -> SessionState {
    let mut state = SessionState::default();
    state.rehydrate(&MemoryCredentialStore::default());
    state
}

fn logged_in(is_superuser: bool) -> SessionState {
    let mut state = SessionState::default();
    state.login(
        &MemoryCredentialStore::default(),
        LoginResponse { access: "tok".to_owned(), is_superuser, rest: serde_json::Map::new() },
    );
    state
}

// =============================================================
// Predicate
// =============================================================

#[test]
fn allow_is_session_presence() {
    assert!(!allow(None));
    assert!(allow(logged_in(false).current()));
}

#[test]
fn unrestored_state_is_pending() {
    assert_eq!(guard_decision(&SessionState::default()), GuardDecision::Pending);
}

#[test]
fn missing_session_redirects_to_login() {
    assert_eq!(guard_decision(&anonymous()), GuardDecision::Redirect("/login"));
}

#[test]
fn guard_does_not_branch_on_role() {
    assert_eq!(guard_decision(&logged_in(true)), GuardDecision::Allow);
    assert_eq!(guard_decision(&logged_in(false)), GuardDecision::Allow);
}

#[test]
fn logout_flips_decision_to_redirect() {
    let store = MemoryCredentialStore::default();
    let mut state = logged_in(false);
    state.logout(&store);
    assert_eq!(guard_decision(&state), GuardDecision::Redirect("/login"));
}

// =============================================================
// Guarded mounts
// =============================================================

#[test]
fn admin_navigation_without_login_issues_no_calls() {
    let api = RecordingApi::new();
    let outcome = guarded(&anonymous(), |session| {
        futures::executor::block_on(load_admin(&api, &session.token))
    });
    assert!(matches!(outcome, Guarded::Redirect("/login")));
    assert!(api.calls().is_empty());
}

#[test]
fn pending_guard_issues_no_calls() {
    let api = RecordingApi::new();
    let outcome = guarded(&SessionState::default(), |session| {
        futures::executor::block_on(load_user(&api, &session.token))
    });
    assert!(matches!(outcome, Guarded::Pending));
    assert!(api.calls().is_empty());
}

#[test]
fn allowed_mount_receives_session_token() {
    let api = RecordingApi::new();
    let outcome = guarded(&logged_in(false), |session| {
        futures::executor::block_on(load_user(&api, &session.token))
    });
    assert!(matches!(outcome, Guarded::Mounted(_)));
    assert_eq!(api.calls(), vec!["fetch_me tok", "list_products tok"]);
}

// =============================================================
// RequireSession rendering
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use leptos::prelude::*;

    use super::*;

    /// Protected child that counts how often it is constructed.
    #[component]
    fn CountingPage(mounts: Arc<AtomicUsize>) -> impl IntoView {
        mounts.fetch_add(1, Ordering::SeqCst);
        view! { <p>"protected content"</p> }
    }

    fn render_guarded(state: SessionState) -> (String, usize) {
        let mounts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&mounts);
        let html = Owner::new().with(|| {
            provide_context(RwSignal::new(state));
            view! {
                <RequireSession>
                    <CountingPage mounts=Arc::clone(&counter)/>
                </RequireSession>
            }
            .to_html()
        });
        (html, mounts.load(Ordering::SeqCst))
    }

    #[test]
    fn anonymous_session_never_constructs_children() {
        let (html, mounts) = render_guarded(anonymous());
        assert_eq!(mounts, 0);
        assert!(!html.contains("protected content"));
    }

    #[test]
    fn pending_session_never_constructs_children() {
        let (html, mounts) = render_guarded(SessionState::default());
        assert_eq!(mounts, 0);
        assert!(!html.contains("protected content"));
    }

    #[test]
    fn logged_in_session_renders_children_once() {
        let (html, mounts) = render_guarded(logged_in(false));
        assert_eq!(mounts, 1);
        assert!(html.contains("protected content"));
    }
}
