//! Custom field descriptors for asset layouts.
//!
//! A [`Field`] describes one custom field of an asset layout. A list of them
//! is flattened into the `fields` array of an asset layout create/update
//! body. Optional attributes are only serialized when set, and `expiration`
//! only when `true`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type of a custom asset layout field.
///
/// The serialized form is the exact string the Hudu API matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    RichText,
    Heading,
    CheckBox,
    Website,
    Password,
    Email,
    Number,
    Date,
    Dropdown,
    Embed,
    Phone,
    AssetLink,
    AssetTag,
}

impl FieldType {
    /// Every field type, in API documentation order.
    pub const ALL: [FieldType; 14] = [
        FieldType::Text,
        FieldType::RichText,
        FieldType::Heading,
        FieldType::CheckBox,
        FieldType::Website,
        FieldType::Password,
        FieldType::Email,
        FieldType::Number,
        FieldType::Date,
        FieldType::Dropdown,
        FieldType::Embed,
        FieldType::Phone,
        FieldType::AssetLink,
        FieldType::AssetTag,
    ];

    /// Wire representation of the field type.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::RichText => "RichText",
            FieldType::Heading => "Heading",
            FieldType::CheckBox => "CheckBox",
            FieldType::Website => "Website",
            FieldType::Password => "Password",
            FieldType::Email => "Email",
            FieldType::Number => "Number",
            FieldType::Date => "Date",
            FieldType::Dropdown => "Dropdown",
            FieldType::Embed => "Embed",
            FieldType::Phone => "Phone",
            FieldType::AssetLink => "AssetLink",
            FieldType::AssetTag => "AssetTag",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One custom field definition of an asset layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub show_in_list: bool,
    pub required: bool,
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Dropdown choices, newline separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// Whether the field tracks an expiration date.
    #[serde(default, skip_serializing_if = "is_false")]
    pub expiration: bool,
    /// Asset layout targeted by an `AssetLink` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkable_id: Option<u64>,
}

impl Field {
    /// Create a field descriptor with only the required attributes.
    pub fn new(
        label: impl Into<String>,
        show_in_list: bool,
        required: bool,
        field_type: FieldType,
    ) -> Self {
        Self {
            label: label.into(),
            show_in_list,
            required,
            field_type,
            min: None,
            max: None,
            hint: None,
            options: None,
            position: None,
            expiration: false,
            linkable_id: None,
        }
    }

    /// Set the minimum value of a `Number` field.
    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum value of a `Number` field.
    pub fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the help text shown under the field.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Set the newline-separated choices of a `Dropdown` field.
    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = Some(options.into());
        self
    }

    /// Set the display position within the layout.
    pub fn with_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    /// Mark a `Date` field as tracking an expiration.
    pub fn with_expiration(mut self, expiration: bool) -> Self {
        self.expiration = expiration;
        self
    }

    /// Set the asset layout an `AssetLink` field points at.
    pub fn with_linkable_id(mut self, linkable_id: u64) -> Self {
        self.linkable_id = Some(linkable_id);
        self
    }
}
