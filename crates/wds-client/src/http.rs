//! HTTP backend abstraction for the Workspace Data Service API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest. Requests are issued exactly once; transport failures
//! and error statuses surface to the caller without retries.

use crate::error::{WdsError, WdsResult};
use crate::models::WdsConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that talk to a WDS deployment.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
///
/// This is an implementation detail - external code should use
/// `DefaultWdsClient`.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL and deserialize the JSON response body.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> WdsResult<T>;

    /// POST a JSON body to a URL and deserialize the JSON response body.
    async fn post_json<T: DeserializeOwned + Send>(&self, url: &Url, body: &Value)
    -> WdsResult<T>;
}

// ============================================================================
// Status Mapping
// ============================================================================

/// Map a non-success status to an error, specializing 404 on paths that
/// address a collection.
fn status_error(url: &Url, status: u16) -> WdsError {
    if status == 404 {
        if let Some(collection_id) = extract_collection_id_from_path(url.path()) {
            return WdsError::CollectionNotFound { collection_id };
        }
    }
    WdsError::ApiRequestFailed {
        status,
        url: url.to_string(),
    }
}

/// Try to extract a collection id from an API path.
fn extract_collection_id_from_path(path: &str) -> Option<String> {
    // Job listing: .../job/v1/instance/{collectionId}
    if let Some(pos) = path.find("/job/v1/instance/") {
        let rest = &path[pos + "/job/v1/instance/".len()..];
        let id = rest.split('/').next().unwrap_or(rest);
        return (!id.is_empty()).then(|| id.to_string());
    }

    // Record search: .../{collectionId}/search/v1/{recordType}
    if let Some(pos) = path.find("/search/v1/") {
        let id = path[..pos].rsplit('/').next()?;
        return (!id.is_empty()).then(|| id.to_string());
    }

    None
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Attaches the configured bearer token to every request and applies the
/// configured timeout. No retry or backoff is performed.
pub struct ReqwestBackend {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &WdsConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            auth_token: config.token.clone(),
        }
    }

    /// Attach the bearer token, when one is configured.
    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_token {
            Some(ref token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    fn check_status(url: &Url, response: reqwest::Response) -> WdsResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(status_error(url, status.as_u16()))
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> WdsResult<T> {
        let response = self.with_auth(self.client.get(url.as_str())).send().await?;
        let response = Self::check_status(url, response)?;
        Ok(response.json().await?)
    }

    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &Value,
    ) -> WdsResult<T> {
        let response = self
            .with_auth(self.client.post(url.as_str()).json(body))
            .send()
            .await?;
        let response = Self::check_status(url, response)?;
        Ok(response.json().await?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
