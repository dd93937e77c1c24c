//! API info method for [`HuduClient`].

use serde_json::Value;

use crate::client::HuduClient;
use crate::endpoints;
use crate::error::Result;

impl HuduClient {
    /// Get the version and release date of the Hudu instance.
    pub async fn get_api_info(&self) -> Result<Value> {
        endpoints::get_api_info(&self.http, &self.base_url, self.api_key()).await
    }
}
