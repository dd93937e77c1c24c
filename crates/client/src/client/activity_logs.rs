//! Activity log methods for [`HuduClient`].

use serde_json::Value;

use crate::client::HuduClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::ActivityLogQuery;

impl HuduClient {
    /// List activity logs.
    ///
    /// A `resource_id` without `resource_type` (or the reverse) is dropped
    /// from the query rather than rejected.
    pub async fn get_activity_logs(&self, query: &ActivityLogQuery) -> Result<Value> {
        endpoints::get_activity_logs(&self.http, &self.base_url, self.api_key(), query).await
    }
}
