//! People report download.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use time::Date;
use uuid::Uuid;

use super::api::ApiClient;
use super::types::{ReportRow, wire_date};
use crate::error::ApiError;

impl ApiClient {
    /// `GET /api/reports/people?spaceUuid=..&requestedDate=..`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn people_report(&self, space_uuid: Uuid, requested_date: Date) -> Result<Vec<ReportRow>, ApiError> {
        let path = format!(
            "/api/reports/people?spaceUuid={space_uuid}&requestedDate={}",
            wire_date::format(requested_date)
        );
        self.get_json(&path).await
    }
}
