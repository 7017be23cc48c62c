//! Session provider: who is logged in and with which bearer token.
//!
//! DESIGN
//! ======
//! `SessionState` is the only owner of the session. It is provided to the
//! tree as an `RwSignal` by the root component, and every mutation goes
//! through `rehydrate`, `login`, or `logout` with the credential store passed
//! in explicitly. Mutations are synchronous, so the route guard sees the new
//! state on the next render pass.
//!
//! LIFECYCLE
//! =========
//! - init: `rehydrate` once on the client, reading the persisted credential.
//! - login: replace the session, persist token and role flag.
//! - teardown: `logout` clears both the session and storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::LoginResponse;
use crate::util::credentials::{CredentialStore, PersistedCredential};

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_PATH: &str = "/admin";
pub const USER_PATH: &str = "/user";

/// Authenticated identity for the current tab.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    /// Opaque bearer token attached to backend requests.
    pub token: String,
    pub is_admin: bool,
    /// Whatever else the token endpoint returned; `Null` after a reload.
    pub profile: serde_json::Value,
}

/// Landing view chosen from the role flag at login time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Admin,
    User,
}

impl Destination {
    #[must_use]
    pub fn for_role(is_admin: bool) -> Self {
        if is_admin { Self::Admin } else { Self::User }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Admin => ADMIN_PATH,
            Self::User => USER_PATH,
        }
    }
}

/// Current session plus whether persisted state has been read yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    session: Option<Session>,
    restored: bool,
}

impl SessionState {
    /// Load the persisted credential, if any. A session established before
    /// rehydration runs is kept.
    pub fn rehydrate(&mut self, store: &impl CredentialStore) {
        if self.session.is_none() {
            self.session = store.load().map(|credential| Session {
                token: credential.token,
                is_admin: credential.is_admin,
                profile: serde_json::Value::Null,
            });
        }
        self.restored = true;
    }

    /// Record a successful token response and persist it.
    ///
    /// The backend's answer is trusted as-is; nothing is validated here.
    pub fn login(&mut self, store: &impl CredentialStore, response: LoginResponse) -> Destination {
        let LoginResponse { access, is_superuser, rest } = response;
        store.save(&PersistedCredential { token: access.clone(), is_admin: is_superuser });
        self.session = Some(Session { token: access, is_admin: is_superuser, profile: serde_json::Value::Object(rest) });
        self.restored = true;
        Destination::for_role(is_superuser)
    }

    /// Drop the session and the persisted credential.
    pub fn logout(&mut self, store: &impl CredentialStore) {
        store.clear();
        self.session = None;
        self.restored = true;
    }

    #[must_use]
    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    #[must_use]
    pub fn is_restored(&self) -> bool {
        self.restored
    }
}
