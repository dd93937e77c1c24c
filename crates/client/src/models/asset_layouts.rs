//! Asset layout models.

use serde::Serialize;

use crate::models::fields::Field;

/// Filters for listing asset layouts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetLayoutQuery {
    pub name: Option<String>,
    pub page: Option<u32>,
}

/// Body of an asset layout create or update, sent under the `asset_layout` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetLayoutParams {
    pub name: String,
    /// Font Awesome icon name, e.g. `fas fa-server`.
    pub icon: String,
    /// Background color as a hex string.
    pub color: String,
    pub icon_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_passwords: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_photos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_types: Option<String>,
    /// Always serialized, even when empty.
    pub fields: Vec<Field>,
}

impl AssetLayoutParams {
    /// Create asset layout parameters with only the required fields set.
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        icon_color: impl Into<String>,
        fields: Vec<Field>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            icon_color: icon_color.into(),
            fields,
            ..Default::default()
        }
    }
}
