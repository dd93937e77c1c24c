//! Request models for the Hudu API.
//!
//! Query types shape `GET` parameters; `*Params` types are serialized into
//! request bodies. Every optional field is an `Option` so an unset value is
//! never confused with a legitimate `false` or `0`.

pub mod activity_logs;
pub mod articles;
pub mod asset_layouts;
pub mod assets;
pub mod fields;

pub use activity_logs::ActivityLogQuery;
pub use articles::{ArticleParams, ArticleQuery};
pub use asset_layouts::{AssetLayoutParams, AssetLayoutQuery};
pub use assets::{AssetParams, AssetQuery, CompanyAssetQuery};
pub use fields::{Field, FieldType};
