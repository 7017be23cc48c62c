use super::*;

#[test]
fn initial_get_is_empty() {
    let keys = ApiKeyHolder::default();
    assert_eq!(keys.get(), "");
    assert!(keys.is_empty());
}

#[test]
fn set_then_get_returns_value() {
    let mut keys = ApiKeyHolder::default();
    keys.set("sk-abc");
    assert_eq!(keys.get(), "sk-abc");
    assert!(!keys.is_empty());
}

#[test]
fn set_overwrites_previous_value() {
    let mut keys = ApiKeyHolder::default();
    keys.set("first");
    keys.set(String::from("second"));
    assert_eq!(keys.get(), "second");
}

#[test]
fn set_accepts_any_format() {
    let mut keys = ApiKeyHolder::default();
    keys.set("  not a real key  ");
    assert_eq!(keys.get(), "  not a real key  ");
}

#[test]
fn resolve_prefers_stored_key() {
    let mut keys = ApiKeyHolder::default();
    keys.set("stored");
    assert_eq!(keys.resolve("temp"), Ok(ResolvedKey { key: "stored".to_owned(), temporary: false }));
}

#[test]
fn resolve_falls_back_to_trimmed_temporary_key() {
    let keys = ApiKeyHolder::default();
    assert_eq!(keys.resolve("  temp  "), Ok(ResolvedKey { key: "temp".to_owned(), temporary: true }));
}

#[test]
fn resolve_without_any_key_is_validation_gap() {
    let keys = ApiKeyHolder::default();
    assert_eq!(keys.resolve("   "), Err(ConsoleError::ValidationGap(MISSING_KEY_PROMPT)));
}
