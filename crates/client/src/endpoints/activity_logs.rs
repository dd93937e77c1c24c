//! Activity log endpoints.

use reqwest::Client;
use secrecy::SecretString;
use serde_json::Value;
use tracing::debug;

use crate::endpoints::query_params::QueryParams;
use crate::endpoints::{Endpoint, fetch};
use crate::error::Result;
use crate::models::ActivityLogQuery;

/// Build the query parameters for an activity log listing.
///
/// `resource_id` and `resource_type` are sent only as a pair; if just one of
/// them is set it is dropped silently.
pub fn activity_log_params(query: &ActivityLogQuery) -> QueryParams {
    let resource = query.resource();
    if resource.is_none() && (query.resource_id.is_some() || query.resource_type.is_some()) {
        debug!(
            resource_id = ?query.resource_id,
            resource_type = ?query.resource_type,
            "Dropping uncoupled resource filter from activity log query"
        );
    }
    let resource_id = resource.map(|(id, _)| id);
    let resource_type = resource.map(|(_, kind)| kind);

    let mut params = QueryParams::new();
    crate::query_params! { params =>
        "page" => query.page,
        "user_id" => query.user_id,
        "user_email" => ref query.user_email,
        "resource_id" => resource_id,
        "resource_type" => resource_type,
        "action_message" => ref query.action_message,
        "start_date" => date query.start_date,
        "page_size" => query.page_size,
    }
    params
}

/// List activity logs.
pub async fn get_activity_logs(
    client: &Client,
    base_url: &str,
    api_key: Option<&SecretString>,
    query: &ActivityLogQuery,
) -> Result<Value> {
    let url = format!("{}/{}", base_url, Endpoint::ActivityLogs);
    fetch(client, &url, api_key, &activity_log_params(query)).await
}
