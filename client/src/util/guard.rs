//! Route guard for the protected view trees.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/admin` and `/user` are wrapped in [`RequireSession`]. The guard only asks
//! whether a session exists; choosing between admin and user happens at login
//! by picking the destination path. Until the persisted credential has been
//! read the guard renders nothing, and without a session it renders a
//! redirect. In both cases the protected children are never constructed, so
//! none of their requests go out.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::{LOGIN_PATH, Session, SessionState};

/// `allow(session) = session is present`.
#[must_use]
pub fn allow(session: Option<&Session>) -> bool {
    session.is_some()
}

/// What a guarded route renders for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Persisted state not read yet; render nothing.
    Pending,
    Redirect(&'static str),
    Allow,
}

#[must_use]
pub fn guard_decision(state: &SessionState) -> GuardDecision {
    if !state.is_restored() {
        GuardDecision::Pending
    } else if allow(state.current()) {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Outcome of [`guarded`].
#[derive(Debug, PartialEq, Eq)]
pub enum Guarded<T> {
    Pending,
    Redirect(&'static str),
    Mounted(T),
}

/// Run `mount` with the session only when the guard allows it.
pub fn guarded<T>(state: &SessionState, mount: impl FnOnce(&Session) -> T) -> Guarded<T> {
    match (guard_decision(state), state.current()) {
        (GuardDecision::Allow, Some(session)) => Guarded::Mounted(mount(session)),
        (GuardDecision::Redirect(path), _) => Guarded::Redirect(path),
        _ => Guarded::Pending,
    }
}

/// Render `children` only while a session exists; otherwise redirect to login.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let decision = Memo::new(move |_| session.with(guard_decision));

    move || {
        decision.track();
        let state = session.get_untracked();
        match guarded(&state, |_| children()) {
            Guarded::Pending => ().into_any(),
            Guarded::Redirect(path) => {
                leptos::logging::log!("guard: no session, redirecting to {path}");
                view! { <Redirect path=path/> }.into_any()
            }
            Guarded::Mounted(view) => view.into_any(),
        }
    }
}
