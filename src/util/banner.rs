//! Announcement banner visibility and dismissal.
//!
//! A banner stays dismissed until the backend publishes a different message.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use serde_json::Value;

use crate::error::StoreError;
use crate::state::flags::Flags;
use crate::util::persistence::KeyValueStore;

pub const PREVIOUS_BANNER_MESSAGE_KEY: &str = "previousBannerMessage";
pub const BANNER_CLOSED_BY_USER_KEY: &str = "bannerHasBeenClosedByUser";

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}

/// Decide whether the banner shows, recording a newly seen message.
///
/// A message that differs from the stored previous one clears the closed
/// flag before visibility is decided.
///
/// # Errors
///
/// Returns an error when the store cannot be read or written.
pub fn should_show_banner(store: &mut dyn KeyValueStore, flags: &Flags) -> Result<bool, StoreError> {
    if !flags.received() {
        return Ok(false);
    }

    let previous = store.get(PREVIOUS_BANNER_MESSAGE_KEY)?;
    let is_new = previous.as_ref().and_then(Value::as_str) != Some(flags.announcement_banner_message.as_str());
    if is_new {
        store.remove(BANNER_CLOSED_BY_USER_KEY)?;
        store.set(PREVIOUS_BANNER_MESSAGE_KEY, Value::String(flags.announcement_banner_message.clone()))?;
    }

    let closed = is_truthy(store.get(BANNER_CLOSED_BY_USER_KEY)?.as_ref());
    Ok(!closed && flags.announcement_banner_enabled)
}

/// # Errors
///
/// Returns an error when the store cannot be written.
pub fn close_banner(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
    store.set(BANNER_CLOSED_BY_USER_KEY, Value::String("true".to_owned()))
}
