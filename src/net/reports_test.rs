use crate::net::fixtures::{client_for, space_uuid, viewing_date};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn people_report_passes_space_and_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reports/people"))
        .and(query_param("spaceUuid", space_uuid().to_string().as_str()))
        .and(query_param("requestedDate", "2020-05-14"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "productName": "Apollo",
            "personName": "Ada",
            "customField1": "alove1"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let rows = client_for(&server).people_report(space_uuid(), viewing_date()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].custom_field1, "alove1");
    assert_eq!(rows[0].product_location, "");
}
