use super::*;
use crate::net::fixtures::{TOKEN, client_for, space_uuid};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn authenticate_responds(status: u16) -> AccessOutcome {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/access_token/authenticate"))
        .and(body_json(json!({"accessToken": TOKEN, "uuid": space_uuid().to_string()})))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(&server)
        .await;
    client_for(&server).check_space_access(true, space_uuid()).await
}

#[tokio::test]
async fn access_outcome_per_status() {
    assert_eq!(authenticate_responds(200).await, AccessOutcome::Granted);
    assert_eq!(authenticate_responds(403).await, AccessOutcome::ReadOnly);
    assert_eq!(authenticate_responds(404).await, AccessOutcome::NotFound);
    assert_eq!(authenticate_responds(401).await, AccessOutcome::LoginRequired);
    assert_eq!(authenticate_responds(500).await, AccessOutcome::LoginRequired);
}

#[tokio::test]
async fn auth_disabled_grants_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = client_for(&server).check_space_access(false, space_uuid()).await;
    assert_eq!(outcome, AccessOutcome::Granted);
}

#[tokio::test]
async fn missing_token_requires_login() {
    let server = MockServer::start().await;
    let client = client_for(&server).with_access_token(None);
    assert_eq!(client.check_space_access(true, space_uuid()).await, AccessOutcome::LoginRequired);
}

#[tokio::test]
async fn validate_posts_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/access_token/validate"))
        .and(body_json(json!({"accessToken": "abc"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).validate_access_token("abc").await.unwrap();
}
