//! REST API endpoint implementations.
//!
//! Each resource module exposes free functions taking the HTTP client, the
//! base URL and the API key, plus pure `*_params` helpers that shape the
//! query string so it can be checked without a server.

mod activity_logs;
mod api_info;
mod articles;
mod asset_layouts;
mod assets;
mod paths;
pub mod query_params;
mod request;

pub use activity_logs::{activity_log_params, get_activity_logs};
pub use api_info::get_api_info;
pub use articles::{
    archive_article, article_params, create_article, get_article, get_articles, remove_article,
    unarchive_article, update_article,
};
pub use asset_layouts::{
    asset_layout_params, create_asset_layout, get_asset_layout, get_asset_layouts,
    update_asset_layout,
};
pub use assets::{
    archive_asset, asset_params, assets_target, company_asset_params, create_asset,
    get_assets, get_company_asset, get_company_assets, remove_asset, unarchive_asset,
    update_asset,
};
pub use paths::Endpoint;
pub use query_params::QueryParams;
pub use request::{API_KEY_HEADER, create, envelope, fetch, remove, replace};
