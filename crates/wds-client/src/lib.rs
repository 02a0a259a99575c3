#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultWdsClient is meant to be
// used directly, not through its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod mapping;
mod models;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultWdsClient;

// Configuration
pub use config::WdsClientConfig;

// Errors
pub use error::{WdsError, WdsResult};

// Wire models and conversion
pub use mapping::{ToMapping, WireModel};
pub use models::{
    DEFAULT_LIMIT, JobStatus, JobSummary, MAX_RECORDS, RecordQueryResponse, RecordResponse,
    SearchRequest, SortDirection,
};
