//! URL construction helpers for the Workspace Data Service API.
//!
//! This module provides pure functions for building WDS API URLs,
//! ensuring consistent URL construction across all API calls.

use crate::models::WdsConfig;
use url::Url;

/// API version segment used by the endpoints this crate covers.
const API_VERSION: &str = "v1";

/// Build the job-listing URL for a collection.
///
/// The collection id is not validated; any value is accepted and the
/// service answers 404 for ids that do not name an existing collection.
pub fn build_job_listing_url(config: &WdsConfig, collection_id: &str) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!(
        "{base_path}/job/{API_VERSION}/instance/{collection_id}"
    ));

    url
}

/// Build the record-search URL for a record type within a collection.
pub fn build_record_search_url(config: &WdsConfig, collection_id: &str, record_type: &str) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!(
        "{base_path}/{collection_id}/search/{API_VERSION}/{}",
        urlencoding::encode(record_type)
    ));

    url
}
