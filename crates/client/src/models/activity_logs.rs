//! Activity log query model.

use chrono::{DateTime, Utc};

/// Filters for listing activity logs.
///
/// `resource_id` and `resource_type` only make sense together; see
/// [`ActivityLogQuery::resource`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityLogQuery {
    pub page: Option<u32>,
    pub user_id: Option<u64>,
    pub user_email: Option<String>,
    pub resource_id: Option<u64>,
    /// Resource type name (Asset, AssetPassword, Company, Article, ...).
    pub resource_type: Option<String>,
    pub action_message: Option<String>,
    /// Sent as an ISO 8601 date-time.
    pub start_date: Option<DateTime<Utc>>,
    pub page_size: Option<u32>,
}

impl ActivityLogQuery {
    /// The resource filter, only when both halves of the pair are present.
    pub fn resource(&self) -> Option<(u64, &str)> {
        match (self.resource_id, self.resource_type.as_deref()) {
            (Some(id), Some(kind)) => Some((id, kind)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_requires_both_halves() {
        let only_id = ActivityLogQuery {
            resource_id: Some(5),
            ..Default::default()
        };
        assert_eq!(only_id.resource(), None);

        let only_type = ActivityLogQuery {
            resource_type: Some("Asset".to_string()),
            ..Default::default()
        };
        assert_eq!(only_type.resource(), None);

        let both = ActivityLogQuery {
            resource_id: Some(5),
            resource_type: Some("Asset".to_string()),
            ..Default::default()
        };
        assert_eq!(both.resource(), Some((5, "Asset")));
    }
}
