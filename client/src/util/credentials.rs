//! Persisted bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads through two `localStorage` entries: the raw
//! token under `token` and the role flag under `is_superuser`. Only the
//! session provider reads or writes them; views never touch storage.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior; SSR paths no-op so
//! server rendering always sees an anonymous visitor.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::cell::RefCell;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "is_superuser";

/// Token and role flag as written to storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistedCredential {
    pub token: String,
    pub is_admin: bool,
}

/// Backing store for the persisted credential.
pub trait CredentialStore {
    fn load(&self) -> Option<PersistedCredential>;
    fn save(&self, credential: &PersistedCredential);
    fn clear(&self);
}

/// Parse the stored role flag; anything but `"true"` is a regular user.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_role(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| value == "true")
}

/// `localStorage`-backed store used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCredentialStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for BrowserCredentialStore {
    fn load(&self) -> Option<PersistedCredential> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
            if token.is_empty() {
                return None;
            }
            let role = storage.get_item(ROLE_KEY).ok().flatten();
            Some(PersistedCredential { token, is_admin: parse_role(role.as_deref()) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, credential: &PersistedCredential) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.set_item(TOKEN_KEY, &credential.token);
            let _ = storage.set_item(ROLE_KEY, if credential.is_admin { "true" } else { "false" });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credential;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(ROLE_KEY);
            }
        }
    }
}

/// In-process store for server rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: RefCell<Option<PersistedCredential>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn with_credential(token: &str, is_admin: bool) -> Self {
        Self { slot: RefCell::new(Some(PersistedCredential { token: token.to_owned(), is_admin })) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<PersistedCredential> {
        self.slot.borrow().clone()
    }

    fn save(&self, credential: &PersistedCredential) {
        *self.slot.borrow_mut() = Some(credential.clone());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
