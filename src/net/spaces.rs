//! Space lifecycle calls: list, fetch, create, edit, delete.

#[cfg(test)]
#[path = "spaces_test.rs"]
mod spaces_test;

use serde_json::json;
use uuid::Uuid;

use super::api::ApiClient;
use super::space_path;
use super::types::{Space, SpaceWithAccessTokenResponse};
use crate::error::ApiError;

impl ApiClient {
    /// `GET /api/spaces/user`: every space the caller belongs to.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn spaces_for_user(&self) -> Result<Vec<Space>, ApiError> {
        self.get_json("/api/spaces/user").await
    }

    /// `GET /api/spaces/{uuid}`.
    ///
    /// # Errors
    ///
    /// `Forbidden` when the caller may only view, `NotFound` for an unknown
    /// space.
    pub async fn space(&self, uuid: Uuid) -> Result<Space, ApiError> {
        self.get_json(&space_path(uuid)).await
    }

    /// `POST /api/spaces/user` with `{spaceName}`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn create_space(&self, space_name: &str) -> Result<SpaceWithAccessTokenResponse, ApiError> {
        tracing::info!(space_name, "creating space");
        self.post_json("/api/spaces/user", &json!({ "spaceName": space_name })).await
    }

    /// `PUT /api/spaces/{uuid}` with the full edited space.
    ///
    /// Used both for renames and for toggling `todayViewIsPublic`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn edit_space(&self, edited: &Space) -> Result<(), ApiError> {
        tracing::info!(uuid = %edited.uuid, name = %edited.name, public = edited.today_view_is_public, "editing space");
        let body = serde_json::to_value(edited)
            .map_err(|source| ApiError::InvalidJson { path: space_path(edited.uuid), source })?;
        self.put(&space_path(edited.uuid), Some(body)).await
    }

    /// `DELETE /api/spaces/{uuid}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn delete_space(&self, uuid: Uuid) -> Result<(), ApiError> {
        tracing::info!(%uuid, "deleting space");
        self.delete(&space_path(uuid), None).await
    }
}
