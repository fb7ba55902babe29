//! Access outcomes for space loads and the ADFS login redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::RunConfig;

pub const ADFS_CATCH_PATH: &str = "/adfs/catch";

/// What the client does after trying to open a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    Granted,
    /// 403: show the space without edit controls.
    ReadOnly,
    /// 404: the space does not exist.
    NotFound,
    /// Any other failure: drop the token and log in again.
    LoginRequired,
}

impl AccessOutcome {
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Self::Granted,
            403 => Self::ReadOnly,
            404 => Self::NotFound,
            _ => Self::LoginRequired,
        }
    }

    /// Whether the stored access token should be discarded.
    #[must_use]
    pub fn clears_token(self) -> bool {
        self == Self::LoginRequired
    }
}

/// Fill the three `%s` slots of the ADFS template with client id, resource,
/// and the redirect URI, in that order.
#[must_use]
pub fn adfs_login_url(config: &RunConfig, origin: &str) -> String {
    let redirect_uri = format!("{}{ADFS_CATCH_PATH}", origin.trim_end_matches('/'));
    [config.adfs_client_id.as_str(), config.adfs_resource.as_str(), redirect_uri.as_str()]
        .into_iter()
        .fold(config.adfs_url_template.clone(), |url, value| url.replacen("%s", value, 1))
}
