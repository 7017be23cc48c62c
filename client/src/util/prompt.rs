//! Blocking user prompts for inputs that are missing before an action starts.

/// Show `message` in a blocking browser alert. Off-browser it is only logged.
pub fn blocking_prompt(message: &str) {
    leptos::logging::log!("prompt: {message}");
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
