//! Record query functionality for the WDS client.

use uuid::Uuid;

use crate::error::WdsResult;
use crate::http::HttpBackend;
use crate::models::{RecordQueryResponse, SearchRequest};
use crate::url::build_record_search_url;

use super::WdsClient;

impl<B: HttpBackend> WdsClient<B> {
    /// Query records of one record type within a collection.
    ///
    /// Returns a single page of results wrapped in the response envelope,
    /// with the evaluated criteria echoed back by the service.
    pub async fn query_records(
        &self,
        collection_id: Uuid,
        record_type: &str,
        request: &SearchRequest,
    ) -> WdsResult<RecordQueryResponse> {
        let url =
            build_record_search_url(&self.config, &collection_id.to_string(), record_type);
        let body = serde_json::to_value(request)?;

        tracing::debug!(%collection_id, record_type, "querying records");
        self.backend.post_json(&url, &body).await
    }
}
