//! Job listing functionality for the WDS client.

use uuid::Uuid;

use crate::error::WdsResult;
use crate::http::HttpBackend;
use crate::models::JobSummary;
use crate::url::build_job_listing_url;

use super::WdsClient;

impl<B: HttpBackend> WdsClient<B> {
    /// List the asynchronous jobs recorded for a collection.
    ///
    /// Fails with [`crate::WdsError::CollectionNotFound`] when the
    /// collection id does not name an existing collection.
    pub async fn jobs_in_collection(&self, collection_id: Uuid) -> WdsResult<Vec<JobSummary>> {
        let url = build_job_listing_url(&self.config, &collection_id.to_string());

        tracing::debug!(%collection_id, "listing jobs");
        self.backend.get_json(&url).await
    }
}
