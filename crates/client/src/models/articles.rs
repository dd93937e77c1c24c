//! Article models.

use serde::Serialize;

/// Filters for listing articles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub name: Option<String>,
    pub company_id: Option<u64>,
    pub page: Option<u32>,
    pub draft: Option<bool>,
    pub page_size: Option<u32>,
}

/// Body of an article create or update, sent under the `article` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleParams {
    /// Article title (required).
    pub name: String,
    /// Article HTML content (required).
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_sharing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
}

impl ArticleParams {
    /// Create article parameters with only the required fields set.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            ..Default::default()
        }
    }
}
