//! Wire models for the Workspace Data Service API.
//!
//! Field names follow Rust conventions; the JSON key for each field is
//! declared once via serde and applied in both directions, so the wire
//! casing (`searchRequest`, `totalRecords`, ...) is preserved exactly.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use url::Url;
use uuid::Uuid;

use crate::mapping::ToMapping;

/// Largest page size the service accepts for record queries.
pub const MAX_RECORDS: u64 = 1_000;

/// Page size used when a query does not specify one.
pub const DEFAULT_LIMIT: u64 = 10;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the WDS client.
#[derive(Debug, Clone)]
pub struct WdsConfig {
    /// Base URL of the WDS deployment (default: <http://localhost:8080>)
    pub base_url: Url,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Optional bearer token for authenticated endpoints
    pub token: Option<String>,
    /// Request timeout (default: 30 seconds)
    pub timeout: Duration,
}

impl Default for WdsConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://localhost:8080").expect("default WDS base URL is valid"),
            user_agent: concat!("wds-client/", env!("CARGO_PKG_VERSION")).to_string(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

// ============================================================================
// Search Request
// ============================================================================

/// Sort direction for record queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending (default)
    #[default]
    Asc,
    /// Descending
    Desc,
}

/// Query criteria for a record search.
///
/// The service echoes this payload back inside [`RecordQueryResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Number of records to skip
    pub offset: u64,
    /// Page size, 1 through [`MAX_RECORDS`]
    pub limit: u64,
    /// Sort direction
    pub sort: SortDirection,
    /// Attribute to sort by; record id when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_attribute: Option<String>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            sort: SortDirection::Asc,
            sort_attribute: None,
        }
    }
}

impl SearchRequest {
    /// Create a new search request with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the page size, clamped to the range the service accepts.
    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit.clamp(1, MAX_RECORDS);
        self
    }

    /// Set the sort direction.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortDirection) -> Self {
        self.sort = sort;
        self
    }

    /// Set the attribute to sort by.
    #[must_use]
    pub fn with_sort_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.sort_attribute = Some(attribute.into());
        self
    }
}

impl ToMapping for SearchRequest {}

// ============================================================================
// Record Response
// ============================================================================

/// One record entry in a query response.
///
/// `attributes` is an arbitrary JSON object; the attribute schema belongs
/// to the record type and is not known to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordResponse {
    /// Record id, unique within its record type
    pub id: String,
    /// Record type the record belongs to
    #[serde(rename = "type")]
    pub record_type: String,
    /// Attribute name/value pairs
    pub attributes: Value,
}

impl RecordResponse {
    /// Create a new record entry.
    pub fn new(id: impl Into<String>, record_type: impl Into<String>, attributes: Value) -> Self {
        Self {
            id: id.into(),
            record_type: record_type.into(),
            attributes,
        }
    }
}

impl ToMapping for RecordResponse {}

// ============================================================================
// Record Query Response (the envelope)
// ============================================================================

/// Response envelope for a record query: the echoed request, the total
/// number of matching records, and one page of results.
///
/// All three fields are mandatory at construction and the envelope is
/// immutable afterwards. Equality is structural over the wire mapping;
/// see [`ToMapping`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordQueryResponse {
    search_request: SearchRequest,
    total_records: u64,
    records: Vec<RecordResponse>,
}

impl RecordQueryResponse {
    /// Create a new envelope from a fully-populated set of fields.
    #[must_use]
    pub const fn new(
        search_request: SearchRequest,
        total_records: u64,
        records: Vec<RecordResponse>,
    ) -> Self {
        Self {
            search_request,
            total_records,
            records,
        }
    }

    /// The query criteria the service evaluated.
    pub const fn search_request(&self) -> &SearchRequest {
        &self.search_request
    }

    /// Total number of records matching the query, across all pages.
    pub const fn total_records(&self) -> u64 {
        self.total_records
    }

    /// The page of records returned; may be empty.
    pub fn records(&self) -> &[RecordResponse] {
        &self.records
    }
}

impl ToMapping for RecordQueryResponse {}

impl PartialEq for RecordQueryResponse {
    fn eq(&self, other: &Self) -> bool {
        self.to_mapping() == other.to_mapping()
    }
}

// ============================================================================
// Jobs
// ============================================================================

/// Lifecycle state of an asynchronous WDS job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// Accepted but not yet queued
    Created,
    /// Waiting for a worker
    Queued,
    /// Currently executing
    Running,
    /// Finished successfully
    Succeeded,
    /// Finished with an error
    Error,
    /// Cancelled before completion
    Cancelled,
    /// State could not be determined
    Unknown,
}

impl JobStatus {
    /// Whether the job has reached a final state.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Error | Self::Cancelled)
    }
}

/// One entry in a collection's job listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    /// Job id
    pub job_id: Uuid,
    /// Job category, e.g. `DATA_IMPORT`
    pub job_type: String,
    /// Current lifecycle state
    pub status: JobStatus,
    /// Creation timestamp (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Last update timestamp (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Error detail when the job failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Job input payload, if the service exposes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    /// Job result payload, if the service exposes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl ToMapping for JobSummary {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wds_config_default() {
        let config = WdsConfig::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
        assert!(config.token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_search_request_defaults() {
        let request = SearchRequest::new();
        assert_eq!(request.offset, 0);
        assert_eq!(request.limit, DEFAULT_LIMIT);
        assert_eq!(request.sort, SortDirection::Asc);
        assert!(request.sort_attribute.is_none());
    }

    #[test]
    fn test_search_request_builder() {
        let request = SearchRequest::new()
            .with_offset(40)
            .with_limit(20)
            .with_sort(SortDirection::Desc)
            .with_sort_attribute("name");

        assert_eq!(request.offset, 40);
        assert_eq!(request.limit, 20);
        assert_eq!(request.sort, SortDirection::Desc);
        assert_eq!(request.sort_attribute, Some("name".to_string()));
    }

    #[test]
    fn test_search_request_clamps_limit() {
        assert_eq!(SearchRequest::new().with_limit(0).limit, 1);
        assert_eq!(SearchRequest::new().with_limit(9999).limit, MAX_RECORDS);
        assert_eq!(SearchRequest::new().with_limit(500).limit, 500);
    }

    #[test]
    fn test_search_request_wire_keys() {
        let request = SearchRequest::new().with_sort_attribute("name");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"offset": 0, "limit": 10, "sort": "asc", "sortAttribute": "name"})
        );
    }

    #[test]
    fn test_record_response_wire_keys() {
        let record = RecordResponse::new("r1", "widget", json!({"color": "blue"}));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"id": "r1", "type": "widget", "attributes": {"color": "blue"}})
        );
    }

    #[test]
    fn test_envelope_accessors() {
        let envelope = RecordQueryResponse::new(
            SearchRequest::new(),
            2,
            vec![RecordResponse::new("r1", "widget", json!({}))],
        );

        assert_eq!(envelope.total_records(), 2);
        assert_eq!(envelope.records().len(), 1);
        assert_eq!(envelope.search_request().limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_envelope_equality_is_structural() {
        let make = |total| {
            RecordQueryResponse::new(
                SearchRequest::new(),
                total,
                vec![RecordResponse::new("r1", "widget", json!({"n": 1}))],
            )
        };

        let a = make(2);
        let b = make(2);
        let c = make(3);

        // Reflexive, symmetric, and sensitive to field values
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
    }

    #[test]
    fn test_job_status_wire_values() {
        assert_eq!(
            serde_json::to_value(JobStatus::Succeeded).unwrap(),
            json!("SUCCEEDED")
        );
        assert_eq!(
            serde_json::from_value::<JobStatus>(json!("ERROR")).unwrap(),
            JobStatus::Error
        );
    }

    #[test]
    fn test_job_status_terminal() {
        assert!(JobStatus::Succeeded.is_terminal());
        assert!(JobStatus::Error.is_terminal());
        assert!(JobStatus::Cancelled.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(!JobStatus::Queued.is_terminal());
    }

    #[test]
    fn test_job_summary_decodes_wire_json() {
        let job: JobSummary = serde_json::from_value(json!({
            "jobId": "11111111-2222-3333-4444-555555555555",
            "jobType": "DATA_IMPORT",
            "status": "RUNNING",
            "created": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(job.job_type, "DATA_IMPORT");
        assert_eq!(job.status, JobStatus::Running);
        assert_eq!(job.created.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert!(job.error_message.is_none());
    }
}
