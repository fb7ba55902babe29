use super::*;
use crate::net::fixtures::space;
use crate::net::types::Permission;

fn mapping(user_id: &str, permission: Permission) -> UserSpaceMapping {
    UserSpaceMapping { id: user_id.into(), user_id: user_id.into(), space_uuid: "s".into(), permission }
}

#[test]
fn read_only_follows_access_outcome() {
    let mut state = SpaceState::default();
    state.set_space(space());
    state.apply_access(AccessOutcome::ReadOnly);
    assert!(state.read_only);
    assert!(state.current.is_some());

    state.apply_access(AccessOutcome::Granted);
    assert!(!state.read_only);
}

#[test]
fn failed_access_closes_the_space() {
    let mut state = SpaceState::default();
    state.set_space(space());
    state.set_users(vec![mapping("owner1", Permission::Owner)]);
    state.apply_access(AccessOutcome::NotFound);
    assert_eq!(state, SpaceState::default());
}

#[test]
fn users_are_stored_owner_first() {
    let mut state = SpaceState::default();
    state.set_users(vec![
        mapping("editor1", Permission::Editor),
        mapping("owner1", Permission::Owner),
        mapping("editor2", Permission::Editor),
    ]);
    let ids: Vec<_> = state.users.iter().map(|u| u.user_id.as_str()).collect();
    assert_eq!(ids, ["owner1", "editor1", "editor2"]);
    assert!(state.is_owner("OWNER1"));
    assert!(!state.is_owner("editor1"));
}
