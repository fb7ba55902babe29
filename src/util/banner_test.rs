use super::*;
use crate::util::persistence::MemoryStore;
use serde_json::json;

fn flags(enabled: bool, message: &str) -> Flags {
    Flags { announcement_banner_enabled: enabled, announcement_banner_message: message.into() }
}

#[test]
fn hidden_until_flags_arrive() {
    let mut store = MemoryStore::new();
    assert!(!should_show_banner(&mut store, &Flags::default()).unwrap());
    assert_eq!(store.get(PREVIOUS_BANNER_MESSAGE_KEY).unwrap(), None);
}

#[test]
fn hidden_when_disabled_but_message_recorded() {
    let mut store = MemoryStore::new();
    assert!(!should_show_banner(&mut store, &flags(false, "hello")).unwrap());
    assert_eq!(store.get(PREVIOUS_BANNER_MESSAGE_KEY).unwrap(), Some(json!("hello")));
}

#[test]
fn shown_until_closed() {
    let mut store = MemoryStore::new();
    let current = flags(true, "hello");
    assert!(should_show_banner(&mut store, &current).unwrap());
    close_banner(&mut store).unwrap();
    assert!(!should_show_banner(&mut store, &current).unwrap());
}

#[test]
fn new_message_reopens_closed_banner() {
    let mut store = MemoryStore::new();
    should_show_banner(&mut store, &flags(true, "first")).unwrap();
    close_banner(&mut store).unwrap();

    assert!(should_show_banner(&mut store, &flags(true, "second")).unwrap());
    assert_eq!(store.get(BANNER_CLOSED_BY_USER_KEY).unwrap(), None);
    assert_eq!(store.get(PREVIOUS_BANNER_MESSAGE_KEY).unwrap(), Some(json!("second")));
}

#[test]
fn boolean_closed_flag_is_honored() {
    let mut store = MemoryStore::new();
    store.set(PREVIOUS_BANNER_MESSAGE_KEY, json!("hello")).unwrap();
    store.set(BANNER_CLOSED_BY_USER_KEY, json!(true)).unwrap();
    assert!(!should_show_banner(&mut store, &flags(true, "hello")).unwrap());
}
