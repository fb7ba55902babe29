//! Product calls, including the archive-by-end-date convention.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use time::Date;
use uuid::Uuid;

use super::api::ApiClient;
use super::space_path;
use super::types::{Product, wire_date};
use crate::error::ApiError;

fn products_path(space_uuid: Uuid) -> String {
    format!("{}/products", space_path(space_uuid))
}

fn product_path(space_uuid: Uuid, product_id: i64) -> String {
    format!("{}/products/{product_id}", space_path(space_uuid))
}

/// Copy of `product` ending the day before `viewing_date`, which is how the
/// backend is told to archive it.
#[must_use]
pub fn archived_copy(product: &Product, viewing_date: Date) -> Product {
    Product {
        end_date: Some(viewing_date.previous_day().unwrap_or(viewing_date)),
        ..product.clone()
    }
}

impl ApiClient {
    /// `GET /api/spaces/{uuid}/products?requestedDate=YYYY-MM-DD`: products
    /// with the assignments in effect on that date.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn products_for_date(&self, space_uuid: Uuid, requested_date: Date) -> Result<Vec<Product>, ApiError> {
        let path = format!("{}?requestedDate={}", products_path(space_uuid), wire_date::format(requested_date));
        self.get_json(&path).await
    }

    /// `POST /api/spaces/{uuid}/products`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn create_product(&self, space_uuid: Uuid, product: &Product) -> Result<Product, ApiError> {
        tracing::info!(%space_uuid, name = %product.name, "creating product");
        self.post_json(&products_path(space_uuid), product).await
    }

    /// `PUT /api/spaces/{uuid}/products/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status, and decode failures.
    pub async fn edit_product(&self, space_uuid: Uuid, product: &Product) -> Result<Product, ApiError> {
        tracing::info!(%space_uuid, id = product.id, "editing product");
        self.put_json(&product_path(space_uuid, product.id), product).await
    }

    /// `DELETE /api/spaces/{uuid}/products/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn delete_product(&self, space_uuid: Uuid, product_id: i64) -> Result<(), ApiError> {
        tracing::info!(%space_uuid, product_id, "deleting product");
        self.delete(&product_path(space_uuid, product_id), None).await
    }

    /// Archive `product` as of `viewing_date`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::edit_product`].
    pub async fn archive_product(&self, space_uuid: Uuid, product: &Product, viewing_date: Date) -> Result<Product, ApiError> {
        self.edit_product(space_uuid, &archived_copy(product, viewing_date)).await
    }
}
