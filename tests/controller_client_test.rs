use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use smarthome_backend::configs::settings::Controller;
use smarthome_backend::models::DeviceType;
use smarthome_backend::services::ControllerClient;

#[tokio::test]
async fn test_authorization_token_sent_as_bearer_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ControllerClient::new(&Controller {
        base_url: server.uri(),
        auth_token: String::from("secret-token"),
    })
    .unwrap();

    let devices = client.find_all_devices().await.unwrap();
    assert!(devices.is_empty());
}

#[tokio::test]
async fn test_device_list_parses_wire_keys() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "dimmer_1", "name": "Dimmer 1", "type": "DIMMER", "groupId": 2 },
            { "id": "switch_1", "name": "Switch 1", "type": "LIGHT_SWITCH" },
        ])))
        .mount(&server)
        .await;

    let client = ControllerClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    let devices = client.find_all_devices().await.unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].device_type, DeviceType::Dimmer);
    assert_eq!(devices[0].group_id, Some(2));
    assert_eq!(devices[1].group_id, None);
}

#[tokio::test]
async fn test_non_success_status_surfaces_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/device-states"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ControllerClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    let error = client.find_all_device_states().await.unwrap_err();

    assert_eq!(error.status(), Some(500));
}

#[tokio::test]
async fn test_base_url_with_trailing_slash_joins_cleanly() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/", server.uri());
    let client = ControllerClient::from_reqwest(&base, reqwest::Client::new()).unwrap();

    client.find_all_devices().await.unwrap();
}
