//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const STATE_DIR_NAME: &str = "peoplemover";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("no state directory available; set PEOPLEMOVER_STATE_DIR")]
    MissingStateDir,
}

impl crate::error::ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBaseUrl(_) => "E_CONFIG_BASE_URL",
            Self::MissingStateDir => "E_CONFIG_STATE_DIR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub state_dir: PathBuf,
    pub timeouts: Timeouts,
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `PEOPLEMOVER_BASE_URL`: default `http://localhost:8080`
    /// - `PEOPLEMOVER_ACCESS_TOKEN`: bearer token; falls back to the stored token
    /// - `PEOPLEMOVER_STATE_DIR`: default `<data dir>/peoplemover`
    /// - `PEOPLEMOVER_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PEOPLEMOVER_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error for a base URL without an http(s) scheme, or when no
    /// state directory can be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(
            std::env::var("PEOPLEMOVER_BASE_URL").as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;
        let access_token = match std::env::var("PEOPLEMOVER_ACCESS_TOKEN") {
            Ok(token) if !token.trim().is_empty() => Some(token.trim().to_owned()),
            _ => None,
        };
        let state_dir = match std::env::var("PEOPLEMOVER_STATE_DIR") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_state_dir()?,
        };
        let timeouts = Timeouts {
            request_secs: env_parse_u64("PEOPLEMOVER_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("PEOPLEMOVER_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, access_token, state_dir, timeouts })
    }

    /// Config pointing at `base_url` with default timeouts, used by tests and
    /// one-off tooling.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an http(s) URL.
    pub fn for_base_url(base_url: &str, state_dir: PathBuf) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            access_token: None,
            state_dir,
            timeouts: Timeouts::default(),
        })
    }

    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

/// Trim trailing slashes and require an http(s) scheme.
///
/// # Errors
///
/// Returns `ConfigError::InvalidBaseUrl` for anything else.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw.to_owned()))
    }
}

fn default_state_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_local_dir()
        .map(|dir| dir.join(STATE_DIR_NAME))
        .ok_or(ConfigError::MissingStateDir)
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    match std::env::var(key) {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, value = %raw, error = %e, "invalid integer, using default");
                default
            }
        },
        Err(_) => default,
    }
}
