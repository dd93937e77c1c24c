//! Asset API methods for [`HuduClient`].
//!
//! # What this module handles:
//! - Listing assets, with the company-scoped shortcut
//! - Fetching, creating, updating and deleting company assets
//! - Archiving and unarchiving company assets
//!
//! # What this module does NOT handle:
//! - Low-level asset endpoint HTTP calls (in [`crate::endpoints`])

use serde_json::Value;

use crate::client::HuduClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AssetParams, AssetQuery, CompanyAssetQuery};

impl HuduClient {
    /// List assets.
    ///
    /// When `company_id` is the only filter, the company-scoped endpoint is
    /// queried instead of the general one.
    pub async fn get_assets(&self, query: &AssetQuery) -> Result<Value> {
        endpoints::get_assets(&self.http, &self.base_url, self.api_key(), query).await
    }

    /// List the assets of one company.
    pub async fn get_company_assets(&self, query: &CompanyAssetQuery) -> Result<Value> {
        endpoints::get_company_assets(&self.http, &self.base_url, self.api_key(), query).await
    }

    /// Get a single asset of a company.
    pub async fn get_company_asset(&self, company_id: u64, id: u64) -> Result<Value> {
        endpoints::get_company_asset(&self.http, &self.base_url, self.api_key(), company_id, id)
            .await
    }

    /// Create an asset in a company.
    pub async fn create_asset(&self, company_id: u64, params: &AssetParams) -> Result<Value> {
        endpoints::create_asset(&self.http, &self.base_url, self.api_key(), company_id, params)
            .await
    }

    /// Update an asset of a company.
    pub async fn update_asset(
        &self,
        company_id: u64,
        id: u64,
        params: &AssetParams,
    ) -> Result<Value> {
        endpoints::update_asset(
            &self.http,
            &self.base_url,
            self.api_key(),
            company_id,
            id,
            params,
        )
        .await
    }

    /// Delete an asset of a company.
    pub async fn remove_asset(&self, company_id: u64, id: u64) -> Result<Value> {
        endpoints::remove_asset(&self.http, &self.base_url, self.api_key(), company_id, id).await
    }

    /// Archive an asset of a company.
    pub async fn archive_asset(&self, company_id: u64, id: u64) -> Result<Value> {
        endpoints::archive_asset(&self.http, &self.base_url, self.api_key(), company_id, id).await
    }

    /// Unarchive an asset of a company.
    pub async fn unarchive_asset(&self, company_id: u64, id: u64) -> Result<Value> {
        endpoints::unarchive_asset(&self.http, &self.base_url, self.api_key(), company_id, id)
            .await
    }
}
