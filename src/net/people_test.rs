use super::*;
use crate::net::fixtures::{bearer, client_for, person, space_uuid};
use crate::net::types::NamedTag;
use time::macros::date;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn people_lists_space_people() {
    let server = MockServer::start().await;
    let body = serde_json::to_value(vec![person(1, "Ada"), person(2, "Grace")]).unwrap();
    Mock::given(method("GET"))
        .and(path(format!("/api/spaces/{}/people", space_uuid())))
        .and(header("Authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let people = client_for(&server).people(space_uuid()).await.unwrap();
    assert_eq!(people, vec![person(1, "Ada"), person(2, "Grace")]);
}

#[tokio::test]
async fn update_person_puts_to_person_path() {
    let server = MockServer::start().await;
    let ada = person(5, "Ada");
    let body = serde_json::to_value(&ada).unwrap();
    Mock::given(method("PUT"))
        .and(path(format!("/api/spaces/{}/people/5", space_uuid())))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client_for(&server).update_person(space_uuid(), &ada).await.unwrap();
    assert_eq!(updated, ada);
}

#[tokio::test]
async fn archive_person_posts_archive_date() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/api/spaces/{}/people/5/archive", space_uuid())))
        .and(body_json(serde_json::json!({"archiveDate": "2020-01-02"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .archive_person(space_uuid(), 5, date!(2020 - 01 - 02))
        .await
        .unwrap();
}

#[tokio::test]
async fn import_people_posts_rows() {
    let server = MockServer::start().await;
    let rows = vec![PersonImportRequest {
        name: "Ada".into(),
        custom_field1: Some("alove1".into()),
        space_role: Some(NamedTag { name: "Engineer".into() }),
        notes: None,
        tags: vec![NamedTag { name: "remote".into() }],
        new_person: false,
    }];
    Mock::given(method("POST"))
        .and(path(format!("/api/spaces/{}/people/import", space_uuid())))
        .and(body_json(serde_json::json!([{
            "name": "Ada",
            "customField1": "alove1",
            "spaceRole": {"name": "Engineer"},
            "notes": null,
            "tags": [{"name": "remote"}],
            "newPerson": false
        }])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).import_people(space_uuid(), &rows).await.unwrap();
}

#[tokio::test]
async fn import_template_is_plain_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/spaces/{}/people/import", space_uuid())))
        .respond_with(ResponseTemplate::new(200).set_body_string("Person Name\tCDSID"))
        .expect(1)
        .mount(&server)
        .await;

    let template = client_for(&server).import_template(space_uuid()).await.unwrap();
    assert_eq!(template, "Person Name\tCDSID");
}
