//! Space-independent lookups: role colors and the runtime config.

#[cfg(test)]
#[path = "meta_test.rs"]
mod meta_test;

use super::api::ApiClient;
use super::types::{Color, RunConfig};
use crate::error::ApiError;

impl ApiClient {
    /// `GET /api/color`: palette offered for role tags.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn colors(&self) -> Result<Vec<Color>, ApiError> {
        self.get_json("/api/color").await
    }

    /// `GET /api/config`; readable without a token.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn run_config(&self) -> Result<RunConfig, ApiError> {
        self.get_public_json("/api/config").await
    }
}
