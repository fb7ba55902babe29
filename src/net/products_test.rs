use super::*;
use crate::net::fixtures::{client_for, product, space_uuid, viewing_date};
use serde_json::json;
use time::macros::date;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn archived_copy_ends_day_before_viewing_date() {
    let archived = archived_copy(&product(1, "Apollo"), date!(2020 - 03 - 01));
    assert_eq!(archived.end_date, Some(date!(2020 - 02 - 29)));
    assert_eq!(archived.name, "Apollo");
}

#[tokio::test]
async fn products_for_date_sends_requested_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/spaces/{}/products", space_uuid())))
        .and(query_param("requestedDate", "2020-05-14"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Apollo", "spaceUuid": "s", "tags": [], "archived": false, "assignments": []}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let products = client_for(&server).products_for_date(space_uuid(), viewing_date()).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Apollo");
}

#[tokio::test]
async fn archive_product_puts_end_date() {
    let server = MockServer::start().await;
    let body = serde_json::to_value(product(4, "Gemini")).unwrap();
    Mock::given(method("PUT"))
        .and(path(format!("/api/spaces/{}/products/4", space_uuid())))
        .and(body_partial_json(json!({"id": 4, "endDate": "2020-05-13"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .archive_product(space_uuid(), &product(4, "Gemini"), viewing_date())
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_product_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/spaces/{}/products/9", space_uuid())))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_product(space_uuid(), 9).await.unwrap();
}
