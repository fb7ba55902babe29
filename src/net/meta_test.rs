use crate::net::fixtures::client_for;
use crate::net::types::Color;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn colors_decode_palette() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/color"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "color": "#FFFF00"}])))
        .mount(&server)
        .await;

    let colors = client_for(&server).colors().await.unwrap();
    assert_eq!(colors, vec![Color { id: 1, color: "#FFFF00".into() }]);
}

#[tokio::test]
async fn run_config_reads_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authEnabled": true,
            "adfsUrlTemplate": "https://adfs/?c=%s&r=%s&u=%s",
            "announcementBannerEnabled": true,
            "announcementBannerMessage": "hello"
        })))
        .mount(&server)
        .await;

    let cfg = client_for(&server).with_access_token(None).run_config().await.unwrap();
    assert!(cfg.auth_enabled);
    assert_eq!(cfg.announcement_banner_message, "hello");
    assert_eq!(cfg.adfs_client_id, "");
}
