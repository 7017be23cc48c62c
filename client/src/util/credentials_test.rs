use super::*;

#[test]
fn parse_role_accepts_only_true() {
    assert!(parse_role(Some("true")));
    assert!(!parse_role(Some("false")));
    assert!(!parse_role(Some("TRUE")));
    assert!(!parse_role(None));
}

#[test]
fn memory_store_starts_empty() {
    let store = MemoryCredentialStore::default();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_save_then_clear() {
    let store = MemoryCredentialStore::default();
    let credential = PersistedCredential { token: "tok".to_owned(), is_admin: true };
    store.save(&credential);
    assert_eq!(store.load(), Some(credential));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn browser_store_is_inert_off_browser() {
    let store = BrowserCredentialStore;
    store.save(&PersistedCredential { token: "tok".to_owned(), is_admin: false });
    assert_eq!(store.load(), None);
}
