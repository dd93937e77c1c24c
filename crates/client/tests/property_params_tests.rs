//! Property-based tests for request parameter shaping.
//!
//! This module uses proptest to verify:
//! - Unset optional arguments never appear in query parameters
//! - Set optional arguments appear exactly once with exactly their value
//! - Unset optional fields never appear in write bodies
//! - The activity log resource filter is sent only as a pair

use chrono::{TimeZone, Utc};
use hudu_client::endpoints::{activity_log_params, article_params, asset_params};
use hudu_client::{
    ActivityLogQuery, ArticleParams, ArticleQuery, AssetLayoutParams, AssetParams, AssetQuery,
    Field, FieldType,
};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

// =============================================================================
// Helper Strategies
// =============================================================================

/// Strategy for short, header- and query-safe names.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _-]{1,24}"
}

fn value_of<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    let mut found = params.iter().filter(|(k, _)| *k == key);
    let first = found.next().map(|(_, v)| v.as_str());
    assert!(found.next().is_none(), "{key} sent more than once");
    first
}

/// Strategy for free-form custom field maps with string values.
fn custom_fields_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z_]{1,12}", name_strategy(), 0..4).prop_map(|fields| {
        fields
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect()
    })
}

/// The body key holds exactly `expected`, or is absent when `expected` is `None`.
fn key_matches(body: &Map<String, Value>, key: &str, expected: Option<Value>) -> bool {
    body.get(key) == expected.as_ref()
}

fn field_type_strategy() -> impl Strategy<Value = FieldType> {
    prop::sample::select(FieldType::ALL.to_vec())
}

// =============================================================================
// Query Parameters
// =============================================================================

proptest! {
    #[test]
    fn prop_article_query_params_match_set_fields(
        name in prop::option::of(name_strategy()),
        company_id in prop::option::of(any::<u64>()),
        page in prop::option::of(any::<u32>()),
        draft in prop::option::of(any::<bool>()),
        page_size in prop::option::of(any::<u32>()),
    ) {
        let query = ArticleQuery { name: name.clone(), company_id, page, draft, page_size };
        let params = article_params(&query);

        prop_assert_eq!(value_of(&params, "name"), name.as_deref());
        prop_assert_eq!(value_of(&params, "company_id").map(String::from), company_id.map(|v| v.to_string()));
        prop_assert_eq!(value_of(&params, "page").map(String::from), page.map(|v| v.to_string()));
        prop_assert_eq!(value_of(&params, "draft").map(String::from), draft.map(|v| v.to_string()));
        prop_assert_eq!(value_of(&params, "page_size").map(String::from), page_size.map(|v| v.to_string()));

        let set = [name.is_some(), company_id.is_some(), page.is_some(), draft.is_some(), page_size.is_some()];
        prop_assert_eq!(params.len(), set.iter().filter(|s| **s).count());
    }

    #[test]
    fn prop_asset_query_params_match_set_fields(
        company_id in prop::option::of(any::<u64>()),
        id in prop::option::of(any::<u64>()),
        name in prop::option::of(name_strategy()),
        primary_serial in prop::option::of(name_strategy()),
        archived in prop::option::of(any::<bool>()),
        page_size in prop::option::of(1u32..500),
    ) {
        let query = AssetQuery {
            company_id,
            id,
            name: name.clone(),
            primary_serial: primary_serial.clone(),
            archived,
            page_size,
            ..Default::default()
        };
        let params = asset_params(&query);

        prop_assert_eq!(value_of(&params, "name"), name.as_deref());
        prop_assert_eq!(value_of(&params, "primary_serial"), primary_serial.as_deref());
        prop_assert_eq!(value_of(&params, "id").map(String::from), id.map(|v| v.to_string()));
        prop_assert_eq!(value_of(&params, "archived").map(String::from), archived.map(|v| v.to_string()));
        prop_assert_eq!(value_of(&params, "page_size").map(String::from), page_size.map(|v| v.to_string()));
        prop_assert!(value_of(&params, "asset_layout_id").is_none());
        prop_assert!(value_of(&params, "page").is_none());
    }

    #[test]
    fn prop_activity_log_resource_filter_is_coupled(
        resource_id in prop::option::of(any::<u64>()),
        resource_type in prop::option::of(name_strategy()),
        user_email in prop::option::of(name_strategy()),
    ) {
        let query = ActivityLogQuery {
            resource_id,
            resource_type: resource_type.clone(),
            user_email: user_email.clone(),
            ..Default::default()
        };
        let params = activity_log_params(&query);

        let paired = resource_id.is_some() && resource_type.is_some();
        prop_assert_eq!(value_of(&params, "resource_id").is_some(), paired);
        prop_assert_eq!(value_of(&params, "resource_type").is_some(), paired);
        prop_assert_eq!(value_of(&params, "user_email"), user_email.as_deref());
    }

    #[test]
    fn prop_activity_log_start_date_is_iso8601(secs in 0i64..4_102_444_800) {
        let start = Utc.timestamp_opt(secs, 0).single().unwrap();
        let query = ActivityLogQuery { start_date: Some(start), ..Default::default() };
        let params = activity_log_params(&query);

        let sent = value_of(&params, "start_date").unwrap();
        prop_assert!(sent.ends_with('Z'));
        let parsed = chrono::DateTime::parse_from_rfc3339(sent).unwrap();
        prop_assert_eq!(parsed.with_timezone(&Utc), start);
    }
}

// =============================================================================
// Write Bodies
// =============================================================================

proptest! {
    #[test]
    fn prop_article_body_omits_unset_fields(
        name in name_strategy(),
        content in name_strategy(),
        enable_sharing in prop::option::of(any::<bool>()),
        folder_id in prop::option::of(any::<u64>()),
    ) {
        let params = ArticleParams { enable_sharing, folder_id, ..ArticleParams::new(name.clone(), content) };
        let body = serde_json::to_value(&params).unwrap();
        let map = body.as_object().unwrap();

        prop_assert_eq!(map["name"].as_str(), Some(name.as_str()));
        prop_assert_eq!(map.contains_key("enable_sharing"), enable_sharing.is_some());
        prop_assert_eq!(map.contains_key("folder_id"), folder_id.is_some());
        prop_assert!(!map.contains_key("company_id"));
    }

    #[test]
    fn prop_field_descriptor_has_only_set_keys(
        label in name_strategy(),
        field_type in field_type_strategy(),
        min in prop::option::of(any::<i64>()),
        hint in prop::option::of(name_strategy()),
        expiration in any::<bool>(),
    ) {
        let mut field = Field::new(label, true, false, field_type).with_expiration(expiration);
        if let Some(min) = min {
            field = field.with_min(min);
        }
        if let Some(hint) = hint.clone() {
            field = field.with_hint(hint);
        }
        let body = serde_json::to_value(&field).unwrap();
        let map = body.as_object().unwrap();

        prop_assert_eq!(map["field_type"].as_str(), Some(field_type.as_str()));
        prop_assert_eq!(map.contains_key("min"), min.is_some());
        prop_assert_eq!(map.contains_key("hint"), hint.is_some());
        prop_assert_eq!(map.contains_key("expiration"), expiration);
        prop_assert!(!map.contains_key("max"));
        prop_assert_eq!(map.len(), 4 + usize::from(min.is_some()) + usize::from(hint.is_some()) + usize::from(expiration));
    }

    #[test]
    fn prop_asset_body_omits_unset_fields(
        asset_layout_id in any::<u64>(),
        name in name_strategy(),
        primary_serial in prop::option::of(name_strategy()),
        primary_mail in prop::option::of(name_strategy()),
        primary_model in prop::option::of(name_strategy()),
        primary_manufacturer in prop::option::of(name_strategy()),
        custom_fields in prop::option::of(custom_fields_strategy()),
    ) {
        let params = AssetParams {
            primary_serial: primary_serial.clone(),
            primary_mail: primary_mail.clone(),
            primary_model: primary_model.clone(),
            primary_manufacturer: primary_manufacturer.clone(),
            custom_fields: custom_fields.clone(),
            ..AssetParams::new(asset_layout_id, name.clone())
        };
        let body = serde_json::to_value(&params).unwrap();
        let map = body.as_object().unwrap();

        prop_assert_eq!(&map["asset_layout_id"], &json!(asset_layout_id));
        prop_assert_eq!(&map["name"], &json!(name));
        prop_assert!(key_matches(map, "primary_serial", primary_serial.map(Value::String)));
        prop_assert!(key_matches(map, "primary_mail", primary_mail.map(Value::String)));
        prop_assert!(key_matches(map, "primary_model", primary_model.map(Value::String)));
        prop_assert!(key_matches(map, "primary_manufacturer", primary_manufacturer.map(Value::String)));
        prop_assert!(key_matches(map, "custom_fields", custom_fields.map(Value::Object)));
        prop_assert!(!map.contains_key("company_id"));
    }

    #[test]
    fn prop_asset_layout_body_omits_unset_fields(
        name in name_strategy(),
        include_passwords in prop::option::of(any::<bool>()),
        include_photos in prop::option::of(any::<bool>()),
        include_comments in prop::option::of(any::<bool>()),
        include_files in prop::option::of(any::<bool>()),
        password_types in prop::option::of(name_strategy()),
    ) {
        let params = AssetLayoutParams {
            include_passwords,
            include_photos,
            include_comments,
            include_files,
            password_types: password_types.clone(),
            ..AssetLayoutParams::new(name.clone(), "fas fa-server", "#000000", "#ffffff", Vec::new())
        };
        let body = serde_json::to_value(&params).unwrap();
        let map = body.as_object().unwrap();

        prop_assert_eq!(&map["name"], &json!(name));
        prop_assert_eq!(&map["fields"], &json!([]));
        prop_assert!(key_matches(map, "include_passwords", include_passwords.map(Value::Bool)));
        prop_assert!(key_matches(map, "include_photos", include_photos.map(Value::Bool)));
        prop_assert!(key_matches(map, "include_comments", include_comments.map(Value::Bool)));
        prop_assert!(key_matches(map, "include_files", include_files.map(Value::Bool)));
        prop_assert!(key_matches(map, "password_types", password_types.map(Value::String)));
    }
}
