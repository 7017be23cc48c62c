use super::*;
use crate::net::api::CatalogApi;
use crate::net::api::fake::RecordingApi;
use crate::net::types::Credentials;
use crate::util::credentials::MemoryCredentialStore;

fn response(access: &str, is_superuser: bool) -> LoginResponse {
    LoginResponse { access: access.to_owned(), is_superuser, rest: serde_json::Map::new() }
}

// =============================================================
// Defaults and accessors
// =============================================================

#[test]
fn default_state_is_anonymous_and_unrestored() {
    let state = SessionState::default();
    assert!(state.current().is_none());
    assert!(state.token().is_none());
    assert!(!state.is_restored());
}

#[test]
fn destination_paths() {
    assert_eq!(Destination::for_role(true), Destination::Admin);
    assert_eq!(Destination::for_role(false), Destination::User);
    assert_eq!(Destination::Admin.path(), "/admin");
    assert_eq!(Destination::User.path(), "/user");
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_stores_session_and_persists_credential() {
    let store = MemoryCredentialStore::default();
    let mut state = SessionState::default();
    let dest = state.login(&store, response("tok123", false));

    assert_eq!(dest, Destination::User);
    let session = state.current().unwrap();
    assert_eq!(session.token, "tok123");
    assert!(!session.is_admin);
    assert!(state.is_restored());
    assert_eq!(store.load(), Some(PersistedCredential { token: "tok123".to_owned(), is_admin: false }));
}

#[test]
fn superuser_login_routes_to_admin() {
    let store = MemoryCredentialStore::default();
    let mut state = SessionState::default();
    assert_eq!(state.login(&store, response("t", true)), Destination::Admin);
    assert!(state.current().unwrap().is_admin);
}

#[test]
fn login_keeps_extra_payload_as_profile() {
    let store = MemoryCredentialStore::default();
    let mut state = SessionState::default();
    let mut rest = serde_json::Map::new();
    rest.insert("refresh".to_owned(), serde_json::json!("r1"));
    state.login(&store, LoginResponse { access: "t".to_owned(), is_superuser: false, rest });
    assert_eq!(state.current().unwrap().profile, serde_json::json!({ "refresh": "r1" }));
}

#[test]
fn logout_clears_session_and_storage() {
    let store = MemoryCredentialStore::default();
    let mut state = SessionState::default();
    state.login(&store, response("tok", true));
    state.logout(&store);
    assert!(state.current().is_none());
    assert_eq!(store.load(), None);
}

#[test]
fn repeated_login_logout_always_ends_anonymous() {
    let store = MemoryCredentialStore::default();
    let mut state = SessionState::default();
    for (i, admin) in [true, false, true, false].into_iter().enumerate() {
        state.login(&store, response(&format!("tok{i}"), admin));
        assert_eq!(state.token(), Some(format!("tok{i}").as_str()));
        state.logout(&store);
        assert!(state.current().is_none());
        assert_eq!(store.load(), None);
    }
}

#[test]
fn relogin_replaces_previous_session() {
    let store = MemoryCredentialStore::default();
    let mut state = SessionState::default();
    state.login(&store, response("first", true));
    state.login(&store, response("second", false));
    assert_eq!(state.token(), Some("second"));
    assert_eq!(store.load().unwrap().token, "second");
}

// =============================================================
// Rehydration
// =============================================================

#[test]
fn rehydrate_restores_token_and_role() {
    let store = MemoryCredentialStore::with_credential("saved", true);
    let mut state = SessionState::default();
    state.rehydrate(&store);
    let session = state.current().unwrap();
    assert_eq!(session.token, "saved");
    assert!(session.is_admin);
    assert_eq!(session.profile, serde_json::Value::Null);
    assert!(state.is_restored());
}

#[test]
fn rehydrate_with_empty_store_stays_anonymous_but_restored() {
    let store = MemoryCredentialStore::default();
    let mut state = SessionState::default();
    state.rehydrate(&store);
    assert!(state.current().is_none());
    assert!(state.is_restored());
}

#[test]
fn rehydrate_does_not_override_fresh_login() {
    let store = MemoryCredentialStore::default();
    let mut state = SessionState::default();
    state.login(&store, response("fresh", false));
    let stale = MemoryCredentialStore::with_credential("stale", true);
    state.rehydrate(&stale);
    assert_eq!(state.token(), Some("fresh"));
}

// =============================================================
// Scenario: alice logs in as a regular user
// =============================================================

#[test]
fn alice_login_scenario_lands_on_user_view() {
    let api = RecordingApi::new().with_login("tok123", false);
    let store = MemoryCredentialStore::default();
    let mut state = SessionState::default();

    let credentials = Credentials { username: "alice".to_owned(), password: "x".to_owned() };
    let resp = futures::executor::block_on(api.obtain_token(&credentials)).unwrap();
    let dest = state.login(&store, resp);

    let session = state.current().unwrap();
    assert_eq!(session.token, "tok123");
    assert!(!session.is_admin);
    assert_eq!(dest.path(), "/user");
    assert_eq!(api.calls(), vec!["token alice"]);
}
