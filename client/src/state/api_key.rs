//! In-memory holder for the third-party completion key.
//!
//! The key lives only as long as the tab: it is never written to storage and
//! has no expiry. Nothing checks its format; the completion service is the
//! judge.

#[cfg(test)]
#[path = "api_key_test.rs"]
mod api_key_test;

use crate::net::error::ConsoleError;

pub const MISSING_KEY_PROMPT: &str = "Please enter your OpenAI API key to generate an advertisement.";

/// Optional API key shared by the login and user views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiKeyHolder {
    key: Option<String>,
}

impl ApiKeyHolder {
    /// Current key, or `""` when none has been set.
    #[must_use]
    pub fn get(&self) -> &str {
        self.key.as_deref().unwrap_or_default()
    }

    pub fn set(&mut self, key: impl Into<String>) {
        self.key = Some(key.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.get().is_empty()
    }

    /// Key to use for one call: the stored key, else the temporary one typed
    /// into the view.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::ValidationGap`] when both are empty.
    pub fn resolve(&self, temporary: &str) -> Result<ResolvedKey, ConsoleError> {
        if !self.is_empty() {
            return Ok(ResolvedKey { key: self.get().to_owned(), temporary: false });
        }
        let temporary = temporary.trim();
        if temporary.is_empty() {
            return Err(ConsoleError::ValidationGap(MISSING_KEY_PROMPT));
        }
        Ok(ResolvedKey { key: temporary.to_owned(), temporary: true })
    }
}

/// A key picked by [`ApiKeyHolder::resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedKey {
    pub key: String,
    /// True when the key came from the view's temporary field.
    pub temporary: bool,
}
