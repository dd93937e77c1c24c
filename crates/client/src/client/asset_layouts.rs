//! Asset layout API methods for [`HuduClient`].

use serde_json::Value;

use crate::client::HuduClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AssetLayoutParams, AssetLayoutQuery};

impl HuduClient {
    /// List asset layouts.
    pub async fn get_asset_layouts(&self, query: &AssetLayoutQuery) -> Result<Value> {
        endpoints::get_asset_layouts(&self.http, &self.base_url, self.api_key(), query).await
    }

    /// Get a single asset layout by id.
    pub async fn get_asset_layout(&self, id: u64) -> Result<Value> {
        endpoints::get_asset_layout(&self.http, &self.base_url, self.api_key(), id).await
    }

    /// Create an asset layout with its custom fields.
    pub async fn create_asset_layout(&self, params: &AssetLayoutParams) -> Result<Value> {
        endpoints::create_asset_layout(&self.http, &self.base_url, self.api_key(), params).await
    }

    /// Update an asset layout with its custom fields.
    pub async fn update_asset_layout(&self, id: u64, params: &AssetLayoutParams) -> Result<Value> {
        endpoints::update_asset_layout(&self.http, &self.base_url, self.api_key(), id, params)
            .await
    }
}
