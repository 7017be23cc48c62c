//! Networking modules for the catalog backend and the completion service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles catalog REST calls, `completion` talks to the third-party
//! chat-completion endpoint, `types` defines the wire schema and `error`
//! the failure taxonomy shared by both clients.

pub mod api;
pub mod completion;
pub mod error;
pub mod types;
