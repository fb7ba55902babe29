//! The currently open space and its membership.

#[cfg(test)]
#[path = "space_test.rs"]
mod space_test;

use crate::net::types::{Space, UserSpaceMapping};
use crate::net::users::owner_first;
use crate::util::auth::AccessOutcome;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpaceState {
    pub current: Option<Space>,
    pub read_only: bool,
    pub users: Vec<UserSpaceMapping>,
}

impl SpaceState {
    pub fn set_space(&mut self, space: Space) {
        self.current = Some(space);
    }

    /// Record the result of an access check. Only `ReadOnly` leaves the space
    /// open without edit rights; `Granted` clears a previous read-only flag.
    pub fn apply_access(&mut self, outcome: AccessOutcome) {
        match outcome {
            AccessOutcome::Granted => self.read_only = false,
            AccessOutcome::ReadOnly => self.read_only = true,
            AccessOutcome::NotFound | AccessOutcome::LoginRequired => {
                self.current = None;
                self.read_only = false;
                self.users.clear();
            }
        }
    }

    /// Replace the membership list, owner first.
    pub fn set_users(&mut self, mut users: Vec<UserSpaceMapping>) {
        owner_first(&mut users);
        self.users = users;
    }

    #[must_use]
    pub fn owner(&self) -> Option<&UserSpaceMapping> {
        self.users.iter().find(|u| u.is_owner())
    }

    /// Case-insensitive, since user ids are corporate ids typed by hand.
    #[must_use]
    pub fn is_owner(&self, user_id: &str) -> bool {
        self.owner().is_some_and(|owner| owner.user_id.eq_ignore_ascii_case(user_id))
    }
}
