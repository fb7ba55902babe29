//! Assignment calls: creating a person's assignments for a date, history,
//! effective dates, and the reassignment feed.

#[cfg(test)]
#[path = "assignments_test.rs"]
mod assignments_test;

use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use super::api::ApiClient;
use super::space_path;
use super::types::{Assignment, CreateAssignmentsRequest, Person, ProductPlaceholderPair, Reassignment, wire_date};
use crate::error::ApiError;

#[derive(Deserialize)]
struct WireDate(#[serde(with = "wire_date::required")] Date);

fn person_path(space_uuid: Uuid, person_id: i64) -> String {
    format!("{}/person/{person_id}", space_path(space_uuid))
}

impl ApiClient {
    /// `POST .../person/{id}/assignment/create`: replace the person's
    /// assignments from `requested_date` on with `products`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn create_assignments_for_date(
        &self,
        space_uuid: Uuid,
        person_id: i64,
        requested_date: Date,
        products: Vec<ProductPlaceholderPair>,
    ) -> Result<Vec<Assignment>, ApiError> {
        tracing::info!(%space_uuid, person_id, %requested_date, count = products.len(), "creating assignments");
        let request = CreateAssignmentsRequest { requested_date, products };
        let path = format!("{}/assignment/create", person_path(space_uuid, person_id));
        self.post_json(&path, &request).await
    }

    /// `GET .../person/{id}/assignments/date/{date}`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn assignments_for_person_on(
        &self,
        space_uuid: Uuid,
        person_id: i64,
        date: Date,
    ) -> Result<Vec<Assignment>, ApiError> {
        let path = format!("{}/assignments/date/{}", person_path(space_uuid, person_id), wire_date::format(date));
        self.get_json(&path).await
    }

    /// `GET /api/spaces/{uuid}/assignment/dates`: every date on which
    /// assignments change, as the backend orders them.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn assignment_effective_dates(&self, space_uuid: Uuid) -> Result<Vec<Date>, ApiError> {
        let dates: Vec<WireDate> = self.get_json(&format!("{}/assignment/dates", space_path(space_uuid))).await?;
        Ok(dates.into_iter().map(|WireDate(date)| date).collect())
    }

    /// `DELETE .../person/{id}/assignment/delete/{date}` with the person as
    /// body.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn delete_assignments_for_date(&self, space_uuid: Uuid, person: &Person, date: Date) -> Result<(), ApiError> {
        tracing::info!(%space_uuid, person_id = person.id, %date, "deleting assignments");
        let path = format!("{}/assignment/delete/{}", person_path(space_uuid, person.id), wire_date::format(date));
        let body = serde_json::to_value(person).map_err(|source| ApiError::InvalidJson { path: path.clone(), source })?;
        self.delete(&path, Some(body)).await
    }

    /// `GET /api/spaces/{uuid}/reassignment/{date}`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn reassignments(&self, space_uuid: Uuid, date: Date) -> Result<Vec<Reassignment>, ApiError> {
        self.get_json(&format!("{}/reassignment/{}", space_path(space_uuid), wire_date::format(date))).await
    }

    /// `GET /api/v2/spaces/{uuid}/person/{id}/assignments`: full history.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn assignment_history(&self, space_uuid: Uuid, person_id: i64) -> Result<Vec<Assignment>, ApiError> {
        self.get_json(&format!("/api/v2/spaces/{space_uuid}/person/{person_id}/assignments")).await
    }
}
