//! Asset models.

use serde::Serialize;
use serde_json::{Map, Value};

/// Default page size used by asset listings.
pub const DEFAULT_ASSET_PAGE_SIZE: u32 = 25;

/// Filters for listing assets.
///
/// `archived` and `page_size` default to `Some(false)` and `Some(25)` and are
/// therefore sent unless explicitly cleared with `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetQuery {
    pub company_id: Option<u64>,
    pub id: Option<u64>,
    pub name: Option<String>,
    pub primary_serial: Option<String>,
    pub asset_layout_id: Option<u64>,
    pub page: Option<u32>,
    pub archived: Option<bool>,
    pub page_size: Option<u32>,
}

impl Default for AssetQuery {
    fn default() -> Self {
        Self {
            company_id: None,
            id: None,
            name: None,
            primary_serial: None,
            asset_layout_id: None,
            page: None,
            archived: Some(false),
            page_size: Some(DEFAULT_ASSET_PAGE_SIZE),
        }
    }
}

impl AssetQuery {
    /// Query for all assets of one company.
    pub fn for_company(company_id: u64) -> Self {
        Self {
            company_id: Some(company_id),
            ..Default::default()
        }
    }

    /// The company id when it is the only filter given.
    ///
    /// Paging and archive flags are not filters.
    pub fn company_only(&self) -> Option<u64> {
        let no_other_filter = self.id.is_none()
            && self.name.is_none()
            && self.primary_serial.is_none()
            && self.asset_layout_id.is_none();
        self.company_id.filter(|_| no_other_filter)
    }
}

/// Filters for listing the assets of a single company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyAssetQuery {
    pub company_id: u64,
    pub page: Option<u32>,
    pub archived: Option<bool>,
    pub page_size: Option<u32>,
}

impl CompanyAssetQuery {
    /// Query with the default `archived=false` and `page_size=25`.
    pub fn new(company_id: u64) -> Self {
        Self {
            company_id,
            page: None,
            archived: Some(false),
            page_size: Some(DEFAULT_ASSET_PAGE_SIZE),
        }
    }

    /// Carry the paging and archive options of a general query over to a
    /// company-scoped one.
    pub fn from_asset_query(company_id: u64, query: &AssetQuery) -> Self {
        Self {
            company_id,
            page: query.page,
            archived: query.archived,
            page_size: query.page_size,
        }
    }
}

/// Body of an asset create or update, sent under the `asset` key.
///
/// The company is part of the URL, not the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssetParams {
    pub asset_layout_id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_serial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_mail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_manufacturer: Option<String>,
    /// Free-form custom field values, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
}

impl AssetParams {
    /// Create asset parameters with only the required fields set.
    pub fn new(asset_layout_id: u64, name: impl Into<String>) -> Self {
        Self {
            asset_layout_id,
            name: name.into(),
            ..Default::default()
        }
    }
}
