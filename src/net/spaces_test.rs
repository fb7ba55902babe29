use crate::net::fixtures::{bearer, client_for, space, space_uuid};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn space_json() -> serde_json::Value {
    json!({
        "id": 1,
        "uuid": space_uuid().to_string(),
        "name": "testSpace",
        "lastModifiedDate": null,
        "todayViewIsPublic": false
    })
}

#[tokio::test]
async fn spaces_for_user_reads_user_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/spaces/user"))
        .and(header("Authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([space_json()])))
        .expect(1)
        .mount(&server)
        .await;

    let spaces = client_for(&server).spaces_for_user().await.unwrap();
    assert_eq!(spaces, vec![space()]);
}

#[tokio::test]
async fn create_space_posts_space_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/spaces/user"))
        .and(body_json(json!({"spaceName": "testSpace"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"space": space_json(), "accessToken": "new-token"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server).create_space("testSpace").await.unwrap();
    assert_eq!(created.space.uuid, space_uuid());
    assert_eq!(created.access_token, "new-token");
}

#[tokio::test]
async fn edit_space_puts_full_space() {
    let server = MockServer::start().await;
    let mut edited = space();
    edited.today_view_is_public = true;
    let mut expected = space_json();
    expected["todayViewIsPublic"] = json!(true);

    Mock::given(method("PUT"))
        .and(path(format!("/api/spaces/{}", space_uuid())))
        .and(body_json(expected))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).edit_space(&edited).await.unwrap();
}

#[tokio::test]
async fn delete_space_by_uuid() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/spaces/{}", space_uuid())))
        .and(header("Authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_space(space_uuid()).await.unwrap();
}

#[tokio::test]
async fn forbidden_space_surfaces_as_forbidden() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/spaces/{}", space_uuid())))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client_for(&server).space(space_uuid()).await.unwrap_err();
    assert_eq!(err.status(), Some(403));
}
