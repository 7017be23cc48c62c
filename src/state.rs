//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for every forwarded request and the backend
//! origin those requests go to.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{DEFAULT_PROXY_CONNECT_TIMEOUT_SECS, HostConfig};
use crate::error::HostError;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns [`HostError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(config: &HostConfig) -> Result<Self, HostError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_PROXY_CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
