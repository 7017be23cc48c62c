use super::*;

#[test]
fn validation_gap_notice_is_the_bare_message() {
    let err = ConsoleError::ValidationGap("Please select at least one feature.");
    assert!(err.is_validation_gap());
    assert_eq!(err.notice("Generate"), "Please select at least one feature.");
}

#[test]
fn network_notice_is_prefixed_with_action() {
    let err = status_failure(503);
    assert!(!err.is_validation_gap());
    assert_eq!(
        err.notice("Loading products"),
        "Loading products: request failed: backend responded with status 503"
    );
}

#[test]
fn auth_failure_displays_status() {
    let err = ConsoleError::Auth { status: 401 };
    assert_eq!(err.to_string(), "login rejected: status 401");
}
