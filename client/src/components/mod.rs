//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dialogs, gauges and shared chrome for the pages, reading
//! the session and API key holders from Leptos context where they need them.

pub mod edit_product_dialog;
pub mod logout_button;
pub mod notice_line;
pub mod rating_dial;
pub mod research_dialog;
