//! Space membership: listing, inviting, removing, and ownership transfer.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use serde_json::json;
use uuid::Uuid;

use super::api::ApiClient;
use super::space_path;
use super::types::UserSpaceMapping;
use crate::error::ApiError;

fn users_path(space_uuid: Uuid) -> String {
    format!("{}/users", space_path(space_uuid))
}

fn user_path(space_uuid: Uuid, user_id: &str) -> String {
    format!("{}/users/{user_id}", space_path(space_uuid))
}

/// Stable sort putting the owner first; the rest keep server order.
pub fn owner_first(users: &mut [UserSpaceMapping]) {
    users.sort_by_key(|user| !user.is_owner());
}

impl ApiClient {
    /// `GET /api/spaces/{uuid}/users`, owner first.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn users_for_space(&self, space_uuid: Uuid) -> Result<Vec<UserSpaceMapping>, ApiError> {
        let mut users: Vec<UserSpaceMapping> = self.get_json(&users_path(space_uuid)).await?;
        owner_first(&mut users);
        Ok(users)
    }

    /// `POST /api/spaces/{uuid}/users` with `{userIds}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn invite_users(&self, space_uuid: Uuid, user_ids: &[String]) -> Result<(), ApiError> {
        tracing::info!(%space_uuid, count = user_ids.len(), "inviting users");
        self.post(&users_path(space_uuid), &json!({ "userIds": user_ids })).await
    }

    /// `DELETE /api/spaces/{uuid}/users/{userId}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn remove_user(&self, space_uuid: Uuid, user_id: &str) -> Result<(), ApiError> {
        tracing::info!(%space_uuid, user_id, "removing user");
        self.delete(&user_path(space_uuid, user_id), None).await
    }

    /// `PUT /api/spaces/{uuid}/users/{userId}` with no body: grant ownership.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn change_owner(&self, space_uuid: Uuid, new_owner: &str) -> Result<(), ApiError> {
        tracing::info!(%space_uuid, new_owner, "changing owner");
        self.put(&user_path(space_uuid, new_owner), None).await
    }

    /// Make `new_owner` the owner, then remove `old_owner` from the space.
    ///
    /// The removal only runs once the ownership change succeeded.
    ///
    /// # Errors
    ///
    /// Returns the first failing call's error.
    pub async fn transfer_ownership(&self, space_uuid: Uuid, old_owner: &str, new_owner: &str) -> Result<(), ApiError> {
        self.change_owner(space_uuid, new_owner).await?;
        self.remove_user(space_uuid, old_owner).await
    }
}
