//! Local form validation run before any request is sent.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::error::ErrorCode;
use crate::net::types::AnyTag;

pub const SPACE_NAME_MAX_LENGTH: usize = 40;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{field} is required")]
    Empty { field: &'static str },
    #[error("{field} is {len} characters; the limit is {max}")]
    TooLong { field: &'static str, len: usize, max: usize },
    #[error("a {kind} named `{name}` already exists")]
    Duplicate { kind: &'static str, name: String },
}

impl ErrorCode for FormError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "E_FORM_EMPTY",
            Self::TooLong { .. } => "E_FORM_TOO_LONG",
            Self::Duplicate { .. } => "E_FORM_DUPLICATE",
        }
    }
}

/// Trimmed space name, at most 40 characters.
///
/// # Errors
///
/// Returns an error for a blank or over-long name.
pub fn validate_space_name(raw: &str) -> Result<String, FormError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FormError::Empty { field: "space name" });
    }
    let len = name.chars().count();
    if len > SPACE_NAME_MAX_LENGTH {
        return Err(FormError::TooLong { field: "space name", len, max: SPACE_NAME_MAX_LENGTH });
    }
    Ok(name.to_owned())
}

/// # Errors
///
/// Returns an error for a blank name.
pub fn validate_person_name(raw: &str) -> Result<String, FormError> {
    required(raw, "person name")
}

/// # Errors
///
/// Returns an error for a blank name.
pub fn validate_product_name(raw: &str) -> Result<String, FormError> {
    required(raw, "product name")
}

fn required(raw: &str, field: &'static str) -> Result<String, FormError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FormError::Empty { field });
    }
    Ok(name.to_owned())
}

/// Trimmed tag name that no other tag of the same kind already uses,
/// compared case-insensitively. `editing` is the tag being renamed, if any.
///
/// # Errors
///
/// Returns an error for a blank or duplicate name.
pub fn validate_tag_name(
    raw: &str,
    kind: &'static str,
    existing: &[AnyTag],
    editing: Option<i64>,
) -> Result<String, FormError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FormError::Empty { field: "tag name" });
    }
    let lowered = name.to_lowercase();
    let taken = existing
        .iter()
        .filter(|tag| Some(tag.id) != editing)
        .any(|tag| tag.name.trim().to_lowercase() == lowered);
    if taken {
        return Err(FormError::Duplicate { kind, name: name.to_owned() });
    }
    Ok(name.to_owned())
}
