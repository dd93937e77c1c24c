//! Endpoint path segments of the Hudu API.
//!
//! Every request URL is assembled from these constants; no builder spells a
//! path segment out literally.

use std::fmt;

/// A resource endpoint or sub-action path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Articles,
    ActivityLogs,
    ApiInfo,
    AssetLayouts,
    AssetPasswords,
    Assets,
    CardsLookup,
    CardsJump,
    Companies,
    CompaniesJump,
    Expirations,
    Folders,
    MagicDash,
    Procedures,
    Relations,
    Websites,
    /// Sub-action appended to a resource URL.
    Archive,
    /// Sub-action appended to a resource URL.
    Unarchive,
}

impl Endpoint {
    /// Resource endpoints, excluding the archive sub-actions.
    pub const RESOURCES: [Endpoint; 16] = [
        Endpoint::Articles,
        Endpoint::ActivityLogs,
        Endpoint::ApiInfo,
        Endpoint::AssetLayouts,
        Endpoint::AssetPasswords,
        Endpoint::Assets,
        Endpoint::CardsLookup,
        Endpoint::CardsJump,
        Endpoint::Companies,
        Endpoint::CompaniesJump,
        Endpoint::Expirations,
        Endpoint::Folders,
        Endpoint::MagicDash,
        Endpoint::Procedures,
        Endpoint::Relations,
        Endpoint::Websites,
    ];

    /// URL path segment for this endpoint.
    pub const fn as_str(self) -> &'static str {
        match self {
            Endpoint::Articles => "articles",
            Endpoint::ActivityLogs => "activity_logs",
            Endpoint::ApiInfo => "api_info",
            Endpoint::AssetLayouts => "asset_layouts",
            Endpoint::AssetPasswords => "asset_passwords",
            Endpoint::Assets => "assets",
            Endpoint::CardsLookup => "cards/lookup",
            Endpoint::CardsJump => "cards/jump",
            Endpoint::Companies => "companies",
            Endpoint::CompaniesJump => "companies/jump",
            Endpoint::Expirations => "expirations",
            Endpoint::Folders => "folders",
            Endpoint::MagicDash => "magic_dash",
            Endpoint::Procedures => "procedures",
            Endpoint::Relations => "relations",
            Endpoint::Websites => "websites",
            Endpoint::Archive => "archive",
            Endpoint::Unarchive => "unarchive",
        }
    }

    /// Whether this segment is a state-transition sub-action.
    pub const fn is_sub_action(self) -> bool {
        matches!(self, Endpoint::Archive | Endpoint::Unarchive)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
