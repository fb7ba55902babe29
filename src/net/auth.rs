//! Access-token calls and the space access check built on them.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::json;
use uuid::Uuid;

use super::api::ApiClient;
use crate::error::ApiError;
use crate::util::auth::AccessOutcome;

impl ApiClient {
    /// `POST /api/access_token/validate` with `{accessToken}`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for an expired or unknown token.
    pub async fn validate_access_token(&self, token: &str) -> Result<(), ApiError> {
        self.post_public("/api/access_token/validate", &json!({ "accessToken": token })).await
    }

    /// `POST /api/access_token/authenticate` with `{accessToken, uuid}`.
    ///
    /// # Errors
    ///
    /// 401, 403, and 404 map to the matching `ApiError` variants; callers
    /// usually go through [`ApiClient::check_space_access`] instead.
    pub async fn user_can_access_space(&self, token: &str, space_uuid: Uuid) -> Result<(), ApiError> {
        self.post_public(
            "/api/access_token/authenticate",
            &json!({ "accessToken": token, "uuid": space_uuid }),
        )
        .await
    }

    /// Decide how a space page should open for the current token.
    ///
    /// With auth disabled every space opens normally. A missing token is
    /// treated like a rejected one.
    pub async fn check_space_access(&self, auth_enabled: bool, space_uuid: Uuid) -> AccessOutcome {
        if !auth_enabled {
            return AccessOutcome::Granted;
        }
        let Some(token) = self.access_token() else {
            return AccessOutcome::LoginRequired;
        };
        match self.user_can_access_space(token, space_uuid).await {
            Ok(()) => AccessOutcome::Granted,
            Err(e) => {
                let outcome = e.access_outcome();
                tracing::warn!(%space_uuid, error = %e, ?outcome, "space access degraded");
                outcome
            }
        }
    }
}
