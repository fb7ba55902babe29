//! Error types shared across the client library.
//!
//! ERROR HANDLING
//! ==============
//! Every error enum implements `ErrorCode` so the CLI can print a stable
//! machine-readable code next to the human message. HTTP status failures are
//! split into the three statuses the client reacts to (401, 403, 404) and a
//! catch-all carrying the response body.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use reqwest::StatusCode;

use crate::util::auth::AccessOutcome;

/// Trait for errors that carry a stable code for display and scripting.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

// =============================================================================
// API ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no access token; run `peoplemover token set <token>` or set PEOPLEMOVER_ACCESS_TOKEN")]
    MissingAccessToken,
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unauthorized: login required")]
    Unauthorized,
    #[error("forbidden: {path}")]
    Forbidden { path: String },
    #[error("not found: {path}")]
    NotFound { path: String },
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid json from {path}: {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Map a non-success status to the matching variant.
    #[must_use]
    pub fn from_status(status: StatusCode, path: &str, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden { path: path.to_owned() },
            StatusCode::NOT_FOUND => Self::NotFound { path: path.to_owned() },
            other => Self::Status { status: other.as_u16(), message: body },
        }
    }

    /// HTTP status behind this error, when there was a response at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// How the UI should react when this error comes back from a space load.
    #[must_use]
    pub fn access_outcome(&self) -> AccessOutcome {
        match self.status() {
            Some(status) => AccessOutcome::from_status(status),
            None => AccessOutcome::LoginRequired,
        }
    }
}

impl ErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAccessToken => "E_MISSING_TOKEN",
            Self::InvalidHeader(_) => "E_INVALID_HEADER",
            Self::Http(_) => "E_HTTP",
            Self::Unauthorized => "E_UNAUTHORIZED",
            Self::Forbidden { .. } => "E_FORBIDDEN",
            Self::NotFound { .. } => "E_NOT_FOUND",
            Self::Status { .. } => "E_STATUS",
            Self::InvalidJson { .. } => "E_INVALID_JSON",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

// =============================================================================
// STORE ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("state file io error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("state file {path} is not a JSON object: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("stored value for `{key}` has the wrong shape: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "E_STORE_IO",
            Self::Corrupt { .. } => "E_STORE_CORRUPT",
            Self::Decode { .. } => "E_STORE_DECODE",
        }
    }
}
