//! Runtime feature flags derived from `GET /api/config`.

#[cfg(test)]
#[path = "flags_test.rs"]
mod flags_test;

use crate::net::types::RunConfig;

/// Message held by `Flags` before the backend config arrives.
pub const DEFAULT_BANNER_MESSAGE: &str = "";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flags {
    pub announcement_banner_enabled: bool,
    pub announcement_banner_message: String,
}

impl Default for Flags {
    fn default() -> Self {
        Self { announcement_banner_enabled: false, announcement_banner_message: DEFAULT_BANNER_MESSAGE.to_owned() }
    }
}

impl Flags {
    /// False until the flags have been loaded from the backend.
    #[must_use]
    pub fn received(&self) -> bool {
        self.announcement_banner_message != DEFAULT_BANNER_MESSAGE
    }
}

impl From<&RunConfig> for Flags {
    fn from(config: &RunConfig) -> Self {
        Self {
            announcement_banner_enabled: config.announcement_banner_enabled,
            announcement_banner_message: config.announcement_banner_message.clone(),
        }
    }
}
