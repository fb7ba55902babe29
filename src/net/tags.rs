//! Tag calls for the four tag kinds a space carries.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::api::ApiClient;
use super::space_path;
use super::types::{AnyTag, RoleRequest, TagRequest};
use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    Location,
    ProductTag,
    PersonTag,
    Role,
}

impl TagKind {
    pub const ALL: [Self; 4] = [Self::Location, Self::ProductTag, Self::PersonTag, Self::Role];

    /// Path segment under `/api/spaces/{uuid}/`.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Location => "locations",
            Self::ProductTag => "product-tags",
            Self::PersonTag => "person-tags",
            Self::Role => "roles",
        }
    }

    /// Singular name for messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::ProductTag => "product tag",
            Self::PersonTag => "person tag",
            Self::Role => "role",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for TagKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "location" | "locations" => Ok(Self::Location),
            "product-tag" | "product-tags" => Ok(Self::ProductTag),
            "person-tag" | "person-tags" => Ok(Self::PersonTag),
            "role" | "roles" => Ok(Self::Role),
            other => Err(format!("unknown tag kind `{other}`")),
        }
    }
}

/// Tag named `name`, ignoring case and surrounding whitespace.
#[must_use]
pub fn tag_by_name<'a>(tags: &'a [AnyTag], name: &str) -> Option<&'a AnyTag> {
    let wanted = name.trim();
    tags.iter().find(|tag| tag.name.trim().eq_ignore_ascii_case(wanted))
}

/// Color id to send when editing role `id`: the requested one, else the
/// color the role already has.
#[must_use]
pub fn role_color_id(existing: &[AnyTag], id: i64, requested: Option<i64>) -> Option<i64> {
    requested.or_else(|| existing.iter().find(|tag| tag.id == id).and_then(|tag| tag.color.as_ref()).map(|c| c.id))
}

fn tags_path(space_uuid: Uuid, kind: TagKind) -> String {
    format!("{}/{}", space_path(space_uuid), kind.segment())
}

impl ApiClient {
    /// `GET /api/spaces/{uuid}/{kind}`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn tags(&self, space_uuid: Uuid, kind: TagKind) -> Result<Vec<AnyTag>, ApiError> {
        self.get_json(&tags_path(space_uuid, kind)).await
    }

    /// `POST /api/spaces/{uuid}/{kind}`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn add_tag(&self, space_uuid: Uuid, kind: TagKind, request: &TagRequest) -> Result<AnyTag, ApiError> {
        tracing::info!(%space_uuid, %kind, name = %request.name, "adding tag");
        self.post_json(&tags_path(space_uuid, kind), request).await
    }

    /// `PUT /api/spaces/{uuid}/{kind}/{id}`.
    ///
    /// `color_id` only applies to roles. The backend clears a role's color
    /// when the body has none, so pass the current color to keep it.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn edit_tag(
        &self,
        space_uuid: Uuid,
        kind: TagKind,
        id: i64,
        name: &str,
        color_id: Option<i64>,
    ) -> Result<AnyTag, ApiError> {
        tracing::info!(%space_uuid, %kind, id, name, "editing tag");
        if kind == TagKind::Role {
            let request = RoleRequest { id: Some(id), name: name.to_owned(), color_id };
            return self.edit_role(space_uuid, &request).await;
        }
        let request = TagRequest { id: Some(id), name: name.to_owned() };
        self.put_json(&format!("{}/{id}", tags_path(space_uuid, kind)), &request).await
    }

    /// `POST /api/spaces/{uuid}/roles` with an optional color.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn add_role(&self, space_uuid: Uuid, request: &RoleRequest) -> Result<AnyTag, ApiError> {
        tracing::info!(%space_uuid, name = %request.name, "adding role");
        self.post_json(&tags_path(space_uuid, TagKind::Role), request).await
    }

    /// `PUT /api/spaces/{uuid}/roles/{id}` with the full role, color included.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures. A request without
    /// an id is sent to the collection path and rejected by the backend.
    pub async fn edit_role(&self, space_uuid: Uuid, request: &RoleRequest) -> Result<AnyTag, ApiError> {
        let base = tags_path(space_uuid, TagKind::Role);
        let path = match request.id {
            Some(id) => format!("{base}/{id}"),
            None => base,
        };
        self.put_json(&path, request).await
    }

    /// `DELETE /api/spaces/{uuid}/{kind}/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn delete_tag(&self, space_uuid: Uuid, kind: TagKind, id: i64) -> Result<(), ApiError> {
        tracing::info!(%space_uuid, %kind, id, "deleting tag");
        self.delete(&format!("{}/{id}", tags_path(space_uuid, kind)), None).await
    }
}
