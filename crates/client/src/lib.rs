//! Hudu REST API client.
//!
//! This crate builds requests for the Hudu IT-documentation platform
//! (activity logs, API info, articles, asset layouts and assets) and decodes
//! every response into a [`serde_json::Value`]. Each call is one request and
//! one response: no retries, no pagination, no caching.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::HuduClient;
pub use client::builder::HuduClientBuilder;
pub use endpoints::Endpoint;
pub use error::{ClientError, Result};
pub use models::{
    ActivityLogQuery, ArticleParams, ArticleQuery, AssetLayoutParams, AssetLayoutQuery,
    AssetParams, AssetQuery, CompanyAssetQuery, Field, FieldType,
};

pub use hudu_config::{Config, ConfigLoader};
