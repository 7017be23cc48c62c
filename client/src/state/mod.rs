//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `api_key`, `catalog`, `research`,
//! `advert`) so pages can depend on small focused models. The session and
//! API key holders are provided as signals by the root component; nothing
//! here is a process-wide global.

pub mod advert;
pub mod api_key;
pub mod catalog;
pub mod research;
pub mod session;
