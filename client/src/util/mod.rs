//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, alerts, routing
//! decisions) and drawing math from page and component logic to improve
//! reuse and testability.

pub mod credentials;
pub mod gauge;
pub mod guard;
pub mod prompt;
