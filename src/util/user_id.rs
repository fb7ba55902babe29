//! Parsing of pasted user-id lists in the share/invite form.

#[cfg(test)]
#[path = "user_id_test.rs"]
mod user_id_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static USER_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9]{1,8}$").expect("user id pattern compiles"));

/// A selectable user id; label and value are always the id itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdOption {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidateUserResult {
    pub options: Vec<UserIdOption>,
    /// Invalid tokens joined by single spaces, in input order.
    pub not_valid: String,
}

impl ValidateUserResult {
    /// The form only submits when something valid was entered and nothing
    /// invalid remains.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.options.is_empty() && self.not_valid.is_empty()
    }

    #[must_use]
    pub fn user_ids(&self) -> Vec<String> {
        self.options.iter().map(|o| o.value.clone()).collect()
    }
}

#[must_use]
pub fn make_option(user_id: &str) -> UserIdOption {
    UserIdOption { label: user_id.to_owned(), value: user_id.to_owned() }
}

#[must_use]
pub fn is_valid_user_id(token: &str) -> bool {
    USER_ID_PATTERN.is_match(token)
}

/// Split on commas, semicolons, and whitespace, then sort tokens into valid
/// options and the invalid remainder.
#[must_use]
pub fn validate(input: &str) -> ValidateUserResult {
    let mut options = Vec::new();
    let mut invalid = Vec::new();
    for token in input
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        if is_valid_user_id(token) {
            options.push(make_option(token));
        } else {
            invalid.push(token);
        }
    }
    ValidateUserResult { options, not_valid: invalid.join(" ") }
}
