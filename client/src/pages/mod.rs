//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages read the bearer token from the session at call
//! time; the route guard guarantees one exists while they are mounted.

use leptos::prelude::*;

use crate::state::session::SessionState;

pub mod admin;
pub mod login;
pub mod user;

/// Bearer token of the current session, or `""` if it was cleared mid-flight.
pub(crate) fn session_token(session: RwSignal<SessionState>) -> String {
    session.with_untracked(|s| s.token().unwrap_or_default().to_owned())
}
