#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Environment variable naming the base URL of the deployment under test.
pub const BASE_URL_VAR: &str = "WDS_BASE_URL";

/// Environment variable carrying the user's bearer token.
pub const USER_TOKEN_VAR: &str = "WDS_USER_TOKEN";

/// Timeout applied to each probe request.
const PROBE_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Errors
// ============================================================================

/// Failures a smoke probe can surface.
#[derive(Debug, Error)]
pub enum SmokeError {
    /// A required environment variable is not set.
    #[error("missing environment variable {name}")]
    Config {
        /// Name of the missing variable
        name: &'static str,
    },

    /// The HTTP call could not complete.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an unexpected status code.
    ///
    /// Carries the response body as diagnostic context.
    #[error("expected status {expected}, got {status}: {body}")]
    UnexpectedStatus {
        /// The status the probe expected
        expected: u16,
        /// The status the service answered with
        status: u16,
        /// Response body text
        body: String,
    },
}

// ============================================================================
// Configuration
// ============================================================================

/// Deployment coordinates for the live smoke tests, read from the
/// environment. Token acquisition is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct SmokeConfig {
    /// Base URL of the WDS deployment
    pub base_url: String,
    /// Bearer token for authenticated endpoints
    pub user_token: String,
}

impl SmokeConfig {
    /// Read the configuration from `WDS_BASE_URL` and `WDS_USER_TOKEN`.
    pub fn from_env() -> Result<Self, SmokeError> {
        let base_url =
            env::var(BASE_URL_VAR).map_err(|_| SmokeError::Config { name: BASE_URL_VAR })?;
        let user_token =
            env::var(USER_TOKEN_VAR).map_err(|_| SmokeError::Config {
                name: USER_TOKEN_VAR,
            })?;

        Ok(Self {
            base_url,
            user_token,
        })
    }
}

// ============================================================================
// Probe
// ============================================================================

/// Raw outcome of one probe call.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body text
    pub body: String,
}

/// Build the job-listing URL for a collection.
///
/// Pure concatenation; the collection id is not validated, so a freshly
/// generated random id (guaranteed not to exist) is accepted.
#[must_use]
pub fn job_listing_url(base_url: &str, collection_id: &str) -> String {
    format!(
        "{}/job/v1/instance/{collection_id}",
        base_url.trim_end_matches('/')
    )
}

/// Issue a single authenticated GET against the given URL.
///
/// One outbound call, never retried; transport failures propagate as
/// [`SmokeError::Http`].
pub async fn probe(url: &str, token: &str) -> Result<ProbeResponse, SmokeError> {
    let client = reqwest::Client::builder().timeout(PROBE_TIMEOUT).build()?;

    tracing::debug!(url, "issuing smoke probe");
    let response = client
        .get(url)
        .header("Authorization", format!("Bearer {token}"))
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;

    Ok(ProbeResponse { status, body })
}

/// Check that the service answered with the given status code.
///
/// The error carries the response body so a failing assertion reports
/// what the service actually said.
pub fn expect_status(response: &ProbeResponse, expected: u16) -> Result<(), SmokeError> {
    if response.status == expected {
        Ok(())
    } else {
        Err(SmokeError::UnexpectedStatus {
            expected,
            status: response.status,
            body: response.body.clone(),
        })
    }
}

/// Check that the service answered 404.
pub fn assert_not_found(response: &ProbeResponse) -> Result<(), SmokeError> {
    expect_status(response, 404)
}
