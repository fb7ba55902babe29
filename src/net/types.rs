//! Wire DTOs for the PeopleMover REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. Calendar dates travel as `YYYY-MM-DD` strings; the backend and
//! older clients use both `""` and `null` for "no date", so the `wire_date`
//! codec accepts either and always writes `null`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use time::Date;
use uuid::Uuid;

// =============================================================================
// SPACES
// =============================================================================

/// A workspace holding products, people, and tags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    #[serde(default)]
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub last_modified_date: Option<String>,
    /// Whether the read-only "today" view can be opened without membership.
    #[serde(default)]
    pub today_view_is_public: bool,
}

/// Response to space creation: the new space plus a fresh token for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceWithAccessTokenResponse {
    pub space: Space,
    pub access_token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    Owner,
    Editor,
    Other(String),
}

impl Permission {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Owner => "owner",
            Self::Editor => "editor",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for Permission {
    fn from(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "owner" => Self::Owner,
            "editor" => Self::Editor,
            _ => Self::Other(raw.to_owned()),
        }
    }
}

impl Serialize for Permission {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// One user's membership in a space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSpaceMapping {
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub space_uuid: String,
    pub permission: Permission,
}

impl UserSpaceMapping {
    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.permission == Permission::Owner
    }
}

// =============================================================================
// TAGS
// =============================================================================

/// Location, product tag, or person tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub space_uuid: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub id: i64,
    pub color: String,
}

/// Role tag; unlike other tags it may carry a display color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleTag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub space_uuid: String,
    #[serde(default)]
    pub color: Option<Color>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_id: Option<i64>,
}

impl From<&RoleTag> for Tag {
    fn from(role: &RoleTag) -> Self {
        Self { id: role.id, name: role.name.clone(), space_uuid: role.space_uuid.clone() }
    }
}

/// A tag as the API returns it for any of the four tag kinds.
///
/// Roles deserialize into this too; the color is simply kept when present.
pub type AnyTag = RoleTag;

// =============================================================================
// PEOPLE / PRODUCTS / ASSIGNMENTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub space_uuid: String,
    #[serde(default)]
    pub space_role: Option<RoleTag>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub new_person: bool,
    #[serde(default, with = "wire_date")]
    pub new_person_date: Option<Date>,
    #[serde(default, with = "wire_date")]
    pub archive_date: Option<Date>,
    /// Corporate user id (CDSID).
    #[serde(default)]
    pub custom_field1: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: i64,
    pub person: Person,
    pub product_id: i64,
    #[serde(default)]
    pub space_uuid: String,
    #[serde(default)]
    pub placeholder: bool,
    #[serde(default, with = "wire_date")]
    pub start_date: Option<Date>,
    #[serde(default, with = "wire_date")]
    pub end_date: Option<Date>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub space_uuid: String,
    #[serde(default, with = "wire_date")]
    pub start_date: Option<Date>,
    #[serde(default, with = "wire_date")]
    pub end_date: Option<Date>,
    #[serde(default)]
    pub dorf: Option<String>,
    #[serde(default)]
    pub space_location: Option<Tag>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPlaceholderPair {
    pub product_id: i64,
    pub placeholder: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentsRequest {
    #[serde(with = "wire_date::required")]
    pub requested_date: Date,
    pub products: Vec<ProductPlaceholderPair>,
}

/// One entry of the "reassigned" feed for a date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reassignment {
    pub person: Person,
    #[serde(default)]
    pub origin_product_name: Option<String>,
    #[serde(default)]
    pub destination_product_name: String,
}

/// A tag or role referenced by name only; the backend creates missing ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedTag {
    pub name: String,
}

/// One element of the `POST .../people/import` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonImportRequest {
    pub name: String,
    pub custom_field1: Option<String>,
    pub space_role: Option<NamedTag>,
    pub notes: Option<String>,
    pub tags: Vec<NamedTag>,
    #[serde(default)]
    pub new_person: bool,
}

// =============================================================================
// REPORTS / META
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportRow {
    pub product_name: String,
    pub product_location: String,
    pub product_tags: String,
    pub person_name: String,
    pub custom_field1: String,
    pub person_role: String,
    pub person_note: String,
    pub person_tags: String,
}

/// Runtime configuration served by `GET /api/config`.
///
/// Keys are snake_case on the wire; camelCase spellings are accepted too.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    #[serde(alias = "authEnabled")]
    pub auth_enabled: bool,
    #[serde(alias = "adfsUrlTemplate")]
    pub adfs_url_template: String,
    #[serde(alias = "adfsClientId")]
    pub adfs_client_id: String,
    #[serde(alias = "adfsResource")]
    pub adfs_resource: String,
    #[serde(alias = "inviteUsersToSpaceEnabled")]
    pub invite_users_to_space_enabled: bool,
    #[serde(alias = "announcementBannerEnabled")]
    pub announcement_banner_enabled: bool,
    #[serde(alias = "announcementBannerMessage")]
    pub announcement_banner_message: String,
}

// =============================================================================
// DATE CODEC
// =============================================================================

pub mod wire_date {
    //! `Option<Date>` as `"YYYY-MM-DD"`, with `""`/`null`/missing as `None`.

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;
    use time::format_description::FormatItem;
    use time::macros::format_description;

    pub const FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

    /// Render a date the way the API expects it in paths and bodies.
    #[must_use]
    pub fn format(date: Date) -> String {
        date.format(FORMAT).unwrap_or_else(|_| date.to_string())
    }

    /// Parse `YYYY-MM-DD`, also accepting a trailing time portion.
    ///
    /// # Errors
    ///
    /// Returns the parser error when the leading date is malformed.
    pub fn parse(raw: &str) -> Result<Date, time::error::Parse> {
        let head = raw.get(..10).unwrap_or(raw);
        Date::parse(head, FORMAT)
    }

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&format(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse(text).map(Some).map_err(D::Error::custom),
        }
    }

    pub mod required {
        use serde::de::Error as _;
        use serde::{Deserialize, Deserializer, Serializer};
        use time::Date;

        pub fn serialize<S: Serializer>(value: &Date, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&super::format(*value))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
            let raw = String::deserialize(deserializer)?;
            super::parse(raw.trim()).map_err(D::Error::custom)
        }
    }
}

fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
