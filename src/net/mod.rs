//! Networking modules for the PeopleMover REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP plumbing, `types` defines the wire schema, and each
//! remaining module adds the calls for one backend resource to `ApiClient`.

pub mod api;
pub mod assignments;
pub mod auth;
pub mod meta;
pub mod people;
pub mod products;
pub mod reports;
pub mod spaces;
pub mod tags;
pub mod types;
pub mod users;

#[cfg(test)]
#[path = "fixtures_test.rs"]
pub(crate) mod fixtures;

use uuid::Uuid;

/// Base path for everything scoped to one space.
fn space_path(space_uuid: Uuid) -> String {
    format!("/api/spaces/{space_uuid}")
}
