//! Article endpoints.

use reqwest::Client;
use secrecy::SecretString;
use serde_json::Value;

use crate::endpoints::query_params::QueryParams;
use crate::endpoints::{Endpoint, create, envelope, fetch, remove, replace};
use crate::error::Result;
use crate::models::{ArticleParams, ArticleQuery};

/// Body key of article writes.
const ARTICLE_KEY: &str = "article";

fn articles_url(base_url: &str) -> String {
    format!("{}/{}", base_url, Endpoint::Articles)
}

fn article_url(base_url: &str, id: u64) -> String {
    format!("{}/{}/{}", base_url, Endpoint::Articles, id)
}

fn article_action_url(base_url: &str, id: u64, action: Endpoint) -> String {
    format!("{}/{}/{}/{}", base_url, Endpoint::Articles, id, action)
}

/// Build the query parameters for an article listing.
pub fn article_params(query: &ArticleQuery) -> QueryParams {
    let mut params = QueryParams::new();
    crate::query_params! { params =>
        "name" => ref query.name,
        "company_id" => query.company_id,
        "page" => query.page,
        "draft" => query.draft,
        "page_size" => query.page_size,
    }
    params
}

/// List articles.
pub async fn get_articles(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    query: &ArticleQuery,
) -> Result<Value> {
    fetch(client, &articles_url(base_url), api_key, &article_params(query)).await
}

/// Get a single article.
pub async fn get_article(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    id: u64,
) -> Result<Value> {
    fetch(client, &article_url(base_url, id), api_key, &[]).await
}

/// Create an article.
pub async fn create_article(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    params: &ArticleParams,
) -> Result<Value> {
    let body = envelope(ARTICLE_KEY, params)?;
    create(client, &articles_url(base_url), api_key, body).await
}

/// Update an existing article.
pub async fn update_article(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    id: u64,
    params: &ArticleParams,
) -> Result<Value> {
    let body = envelope(ARTICLE_KEY, params)?;
    replace(client, &article_url(base_url, id), api_key, Some(body)).await
}

/// Delete an article.
pub async fn remove_article(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    id: u64,
) -> Result<Value> {
    remove(client, &article_url(base_url, id), api_key).await
}

/// Archive an article.
pub async fn archive_article(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    id: u64,
) -> Result<Value> {
    let url = article_action_url(base_url, id, Endpoint::Archive);
    replace(client, &url, api_key, None).await
}

/// Unarchive an article.
pub async fn unarchive_article(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    id: u64,
) -> Result<Value> {
    let url = article_action_url(base_url, id, Endpoint::Unarchive);
    replace(client, &url, api_key, None).await
}
