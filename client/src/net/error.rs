//! Failure taxonomy for console operations.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recoverable: views log it, show it on their notice line,
//! and carry on. Only `ValidationGap` is raised before a request is attempted.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by catalog and completion calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    /// The request was rejected or the backend was unreachable.
    #[error("request failed: {0}")]
    Network(String),

    /// The token endpoint refused the credentials.
    #[error("login rejected: status {status}")]
    Auth { status: u16 },

    /// A required input was missing before the operation could start.
    #[error("{0}")]
    ValidationGap(&'static str),

    /// The completion service rejected the key or the request.
    #[error("completion request failed: {0}")]
    ThirdParty(String),

    /// Browser-only call reached during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ConsoleError {
    /// Whether the failure should be shown as a blocking prompt.
    #[must_use]
    pub fn is_validation_gap(&self) -> bool {
        matches!(self, Self::ValidationGap(_))
    }

    /// Short notice-line text for a failed view action.
    #[must_use]
    pub fn notice(&self, action: &str) -> String {
        match self {
            Self::ValidationGap(msg) => (*msg).to_owned(),
            other => format!("{action}: {other}"),
        }
    }
}

/// Map a non-2xx status from the catalog backend to a network failure.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn status_failure(status: u16) -> ConsoleError {
    ConsoleError::Network(format!("backend responded with status {status}"))
}
