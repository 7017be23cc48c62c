use super::*;
use crate::net::api::fake::RecordingApi;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice  ", "x"),
        Ok(Credentials { username: "alice".to_owned(), password: "x".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let credentials = validate_login_input("alice", " pass ").unwrap();
    assert_eq!(credentials.password, " pass ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("   ", "x"),
        Err(ConsoleError::ValidationGap("Enter both username and password."))
    );
    assert!(validate_login_input("alice", "").is_err());
}

#[test]
fn remember_login_key_stores_non_blank_key() {
    let mut keys = ApiKeyHolder::default();
    remember_login_key(&mut keys, " sk-login ");
    assert_eq!(keys.get(), "sk-login");
}

#[test]
fn remember_login_key_ignores_blank_input() {
    let mut keys = ApiKeyHolder::default();
    keys.set("sk-existing");
    remember_login_key(&mut keys, "   ");
    assert_eq!(keys.get(), "sk-existing");
}

#[test]
fn request_login_skips_backend_for_incomplete_form() {
    let api = RecordingApi::new();
    let err = futures::executor::block_on(request_login(&api, "alice", "")).unwrap_err();
    assert!(err.is_validation_gap());
    assert!(api.calls().is_empty());
}

#[test]
fn request_login_sends_trimmed_username() {
    let api = RecordingApi::new().with_login("tok123", false);
    let resp = futures::executor::block_on(request_login(&api, " alice ", "pw")).unwrap();
    assert_eq!(resp.access, "tok123");
    assert_eq!(api.calls(), vec!["token alice"]);
}

#[test]
fn request_login_passes_through_rejection() {
    let api = RecordingApi::new();
    let err = futures::executor::block_on(request_login(&api, "alice", "wrong")).unwrap_err();
    assert_eq!(err, ConsoleError::Auth { status: 401 });
}
