//! WDS client for querying records and inspecting asynchronous jobs.
//!
//! This module provides the main client interface for interacting with
//! a Workspace Data Service deployment.

mod jobs;
mod records;

use crate::config::WdsClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::WdsConfig;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default WDS client using the reqwest HTTP backend.
pub type DefaultWdsClient = WdsClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for interacting with the Workspace Data Service API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultWdsClient` for production code.
pub struct WdsClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: WdsConfig,
}

impl DefaultWdsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &WdsClientConfig) -> Self {
        let internal_config = Self::to_internal_config(config);
        let backend = ReqwestBackend::new(&internal_config);
        Self {
            backend,
            config: internal_config,
        }
    }

    /// Create a new client with default configuration.
    #[must_use]
    pub fn default_client() -> Self {
        Self::new(&WdsClientConfig::default())
    }

    fn to_internal_config(config: &WdsClientConfig) -> WdsConfig {
        WdsConfig {
            base_url: Url::parse(&config.base_url).unwrap_or_else(|_| {
                Url::parse("http://localhost:8080").expect("default URL is valid")
            }),
            user_agent: config.user_agent.clone(),
            token: config.token.clone(),
            timeout: config.timeout,
        }
    }
}

impl<B: HttpBackend> WdsClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: WdsConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
