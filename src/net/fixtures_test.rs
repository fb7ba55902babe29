//! Fixtures shared by the `net` test modules.

use time::Date;
use time::macros::date;
use uuid::Uuid;
use wiremock::MockServer;

use super::api::ApiClient;
use super::types::{Person, Product, Space};
use crate::config::ClientConfig;

pub const TOKEN: &str = "123456";

pub fn space_uuid() -> Uuid {
    Uuid::parse_str("6d3a1d5e-2f39-4d8e-9b7e-0b6c9b1a2c3d").unwrap()
}

pub fn viewing_date() -> Date {
    date!(2020 - 05 - 14)
}

pub fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig::for_base_url(&server.uri(), std::env::temp_dir())
        .unwrap()
        .with_access_token(TOKEN);
    ApiClient::new(&config).unwrap()
}

pub fn bearer() -> String {
    format!("Bearer {TOKEN}")
}

pub fn space() -> Space {
    Space {
        id: 1,
        uuid: space_uuid(),
        name: "testSpace".into(),
        last_modified_date: None,
        today_view_is_public: false,
    }
}

pub fn person(id: i64, name: &str) -> Person {
    Person {
        id,
        name: name.into(),
        space_uuid: space_uuid().to_string(),
        space_role: None,
        tags: Vec::new(),
        notes: None,
        new_person: false,
        new_person_date: None,
        archive_date: None,
        custom_field1: None,
    }
}

pub fn product(id: i64, name: &str) -> Product {
    Product {
        id,
        name: name.into(),
        space_uuid: space_uuid().to_string(),
        start_date: None,
        end_date: None,
        dorf: None,
        space_location: None,
        tags: Vec::new(),
        archived: false,
        notes: None,
        url: None,
        assignments: Vec::new(),
    }
}
