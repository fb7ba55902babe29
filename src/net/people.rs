//! People calls: CRUD, archiving, and bulk import.

#[cfg(test)]
#[path = "people_test.rs"]
mod people_test;

use serde_json::json;
use time::Date;
use uuid::Uuid;

use super::api::ApiClient;
use super::space_path;
use super::types::{Person, PersonImportRequest, wire_date};
use crate::error::ApiError;

fn people_path(space_uuid: Uuid) -> String {
    format!("{}/people", space_path(space_uuid))
}

fn person_path(space_uuid: Uuid, person_id: i64) -> String {
    format!("{}/people/{person_id}", space_path(space_uuid))
}

impl ApiClient {
    /// `GET /api/spaces/{uuid}/people`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn people(&self, space_uuid: Uuid) -> Result<Vec<Person>, ApiError> {
        self.get_json(&people_path(space_uuid)).await
    }

    /// `POST /api/spaces/{uuid}/people`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn create_person(&self, space_uuid: Uuid, person: &Person) -> Result<Person, ApiError> {
        tracing::info!(%space_uuid, name = %person.name, "creating person");
        self.post_json(&people_path(space_uuid), person).await
    }

    /// `PUT /api/spaces/{uuid}/people/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn update_person(&self, space_uuid: Uuid, person: &Person) -> Result<Person, ApiError> {
        tracing::info!(%space_uuid, id = person.id, "updating person");
        self.put_json(&person_path(space_uuid, person.id), person).await
    }

    /// `DELETE /api/spaces/{uuid}/people/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn remove_person(&self, space_uuid: Uuid, person_id: i64) -> Result<(), ApiError> {
        tracing::info!(%space_uuid, person_id, "removing person");
        self.delete(&person_path(space_uuid, person_id), None).await
    }

    /// `POST /api/spaces/{uuid}/people/{id}/archive` with `{archiveDate}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn archive_person(&self, space_uuid: Uuid, person_id: i64, archive_date: Date) -> Result<(), ApiError> {
        tracing::info!(%space_uuid, person_id, %archive_date, "archiving person");
        let path = format!("{}/archive", person_path(space_uuid, person_id));
        self.post(&path, &json!({ "archiveDate": wire_date::format(archive_date) })).await
    }

    /// `POST /api/spaces/{uuid}/people/import` with the parsed rows.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn import_people(&self, space_uuid: Uuid, rows: &[PersonImportRequest]) -> Result<(), ApiError> {
        tracing::info!(%space_uuid, count = rows.len(), "importing people");
        self.post(&format!("{}/import", people_path(space_uuid)), rows).await
    }

    /// Tab-separated template served by `GET .../people/import`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn import_template(&self, space_uuid: Uuid) -> Result<String, ApiError> {
        self.get_text(&format!("{}/import", people_path(space_uuid))).await
    }
}
