//! Article API methods for [`HuduClient`].
//!
//! # What this module handles:
//! - Listing and fetching articles
//! - Creating, updating and deleting articles
//! - Archiving and unarchiving articles
//!
//! # What this module does NOT handle:
//! - Low-level article endpoint HTTP calls (in [`crate::endpoints`])

use serde_json::Value;

use crate::client::HuduClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ArticleParams, ArticleQuery};

impl HuduClient {
    /// List articles.
    pub async fn get_articles(&self, query: &ArticleQuery) -> Result<Value> {
        endpoints::get_articles(&self.http, &self.base_url, self.api_key(), query).await
    }

    /// Get a single article by id.
    pub async fn get_article(&self, id: u64) -> Result<Value> {
        endpoints::get_article(&self.http, &self.base_url, self.api_key(), id).await
    }

    /// Create a new article.
    pub async fn create_article(&self, params: &ArticleParams) -> Result<Value> {
        endpoints::create_article(&self.http, &self.base_url, self.api_key(), params).await
    }

    /// Update an existing article.
    pub async fn update_article(&self, id: u64, params: &ArticleParams) -> Result<Value> {
        endpoints::update_article(&self.http, &self.base_url, self.api_key(), id, params).await
    }

    /// Delete an article.
    pub async fn remove_article(&self, id: u64) -> Result<Value> {
        endpoints::remove_article(&self.http, &self.base_url, self.api_key(), id).await
    }

    /// Archive an article.
    pub async fn archive_article(&self, id: u64) -> Result<Value> {
        endpoints::archive_article(&self.http, &self.base_url, self.api_key(), id).await
    }

    /// Unarchive an article.
    pub async fn unarchive_article(&self, id: u64) -> Result<Value> {
        endpoints::unarchive_article(&self.http, &self.base_url, self.api_key(), id).await
    }
}
