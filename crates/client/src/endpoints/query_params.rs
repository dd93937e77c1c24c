//! Query parameter building utilities for endpoint modules.
//!
//! The [`query_params!`] macro pushes each optional value onto a
//! [`QueryParams`] list only when it is `Some`, so unset filters never reach
//! the wire.
//!
//! # Example Usage
//!
//! ```ignore
//! let mut params = QueryParams::new();
//! query_params! { params =>
//!     "name" => ref query.name,
//!     "page" => query.page,
//!     "start_date" => date query.start_date,
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};

/// Ordered `(key, value)` query parameters.
pub type QueryParams = Vec<(&'static str, String)>;

/// Format a timestamp as an ISO 8601 date-time (`2024-01-01T00:00:00Z`).
pub fn iso8601(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Build query parameters using `&'static str` keys.
///
/// # Syntax Patterns
///
/// - `key => expr` - For `Option<T>` where `T: Display`, includes if Some
/// - `key => ref expr` - For `Option<String>`, includes if Some with clone
/// - `key => date expr` - For `Option<DateTime<Utc>>`, includes as ISO 8601 if Some
/// - `key => required expr` - For required values with Display, always includes
#[macro_export]
macro_rules! query_params {
    // Base case: no more parameters
    ($vec:ident =>) => {};

    // Required value - always includes - MUST be before generic expr
    ($vec:ident => $key:literal => required $val:expr, $($rest:tt)*) => {
        $vec.push(($key, $val.to_string()));
        $crate::query_params!($vec => $($rest)*);
    };

    // Option<String> with ref (clones the string) - MUST be before generic expr
    ($vec:ident => $key:literal => ref $val:expr, $($rest:tt)*) => {
        if let Some(ref v) = $val {
            $vec.push(($key, v.clone()));
        }
        $crate::query_params!($vec => $($rest)*);
    };

    // Option<DateTime<Utc>> - ISO 8601 - MUST be before generic expr
    ($vec:ident => $key:literal => date $val:expr, $($rest:tt)*) => {
        if let Some(ref v) = $val {
            $vec.push(($key, $crate::endpoints::query_params::iso8601(v)));
        }
        $crate::query_params!($vec => $($rest)*);
    };

    // Option<T> for Copy/Display types (uses to_string()) - LAST because most generic
    ($vec:ident => $key:literal => $val:expr, $($rest:tt)*) => {
        if let Some(v) = $val {
            $vec.push(($key, v.to_string()));
        }
        $crate::query_params!($vec => $($rest)*);
    };
}
