//! Centralized constants for the Hudu client workspace.

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable holding the Hudu API key.
pub const ENV_API_KEY: &str = "HUDU_API_KEY";

/// Environment variable holding the Hudu instance domain (e.g. `docs.example.com`).
pub const ENV_DOMAIN: &str = "HUDU_DOMAIN";

/// Environment variable holding the API version path segment.
pub const ENV_API_VERSION: &str = "HUDU_API_VERSION";

/// When set to `true` or `1`, `.env` files are never loaded.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Connection Defaults
// =============================================================================

/// API version used when neither an explicit value nor the environment sets one.
pub const DEFAULT_API_VERSION: &str = "v1";
