use super::*;
use crate::net::fixtures::{client_for, space_uuid};
use crate::net::types::{Color, Tag};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tag_json(id: i64, name: &str) -> serde_json::Value {
    json!({"id": id, "name": name, "spaceUuid": space_uuid().to_string()})
}

#[test]
fn kinds_parse_singular_and_plural() {
    assert_eq!("location".parse::<TagKind>().unwrap(), TagKind::Location);
    assert_eq!("product-tags".parse::<TagKind>().unwrap(), TagKind::ProductTag);
    assert_eq!("person-tag".parse::<TagKind>().unwrap(), TagKind::PersonTag);
    assert_eq!("roles".parse::<TagKind>().unwrap(), TagKind::Role);
    assert!("colour".parse::<TagKind>().is_err());
}

#[test]
fn role_edit_keeps_existing_color_unless_overridden() {
    let existing = [
        AnyTag { id: 2, name: "PM".into(), space_uuid: "s".into(), color: Some(Color { id: 4, color: "#fff".into() }) },
        AnyTag { id: 3, name: "QA".into(), space_uuid: "s".into(), color: None },
    ];
    assert_eq!(role_color_id(&existing, 2, None), Some(4));
    assert_eq!(role_color_id(&existing, 2, Some(7)), Some(7));
    assert_eq!(role_color_id(&existing, 3, None), None);
    assert_eq!(role_color_id(&existing, 9, None), None);
}

#[test]
fn tags_are_found_by_name_ignoring_case() {
    let tags = [AnyTag { id: 5, name: "Detroit".into(), space_uuid: "s".into(), color: None }];
    assert_eq!(tag_by_name(&tags, " detroit ").map(|t| t.id), Some(5));
    assert!(tag_by_name(&tags, "Dearborn").is_none());
    assert_eq!(Tag::from(&tags[0]), Tag { id: 5, name: "Detroit".into(), space_uuid: "s".into() });
}

#[test]
fn labels_are_singular() {
    assert_eq!(TagKind::ProductTag.label(), "product tag");
    assert_eq!(TagKind::Role.to_string(), "roles");
}

#[tokio::test]
async fn tags_reads_kind_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/spaces/{}/locations", space_uuid())))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([tag_json(1, "Dearborn")])))
        .expect(1)
        .mount(&server)
        .await;

    let tags = client_for(&server).tags(space_uuid(), TagKind::Location).await.unwrap();
    assert_eq!(tags[0].name, "Dearborn");
    assert_eq!(tags[0].color, None);
}

#[tokio::test]
async fn edit_person_tag_puts_to_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/api/spaces/{}/person-tags/6", space_uuid())))
        .and(body_json(json!({"id": 6, "name": "remote"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(tag_json(6, "remote")))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).edit_tag(space_uuid(), TagKind::PersonTag, 6, "remote", Some(3)).await.unwrap();
}

#[tokio::test]
async fn edit_role_puts_to_id_path_and_keeps_color() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/api/spaces/{}/roles/2", space_uuid())))
        .and(body_json(json!({"id": 2, "name": "Software Engineer", "colorId": 4})))
        .respond_with(ResponseTemplate::new(200).set_body_json(tag_json(2, "Software Engineer")))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .edit_tag(space_uuid(), TagKind::Role, 2, "Software Engineer", Some(4))
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_tag_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/spaces/{}/product-tags/3", space_uuid())))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_tag(space_uuid(), TagKind::ProductTag, 3).await.unwrap();
}
