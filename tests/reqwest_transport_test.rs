//! Default transport against a mock server

use llmgate::config::HttpSettings;
use llmgate::error::TransportError;
use llmgate::transport::{HttpTransport, ReqwestTransport, TransportRequest};
use mockito::{Matcher, Server};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::json;

fn request(base_url: String) -> TransportRequest {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer test-key"));
    TransportRequest {
        headers,
        base_url: format!("{base_url}/j2-ultra/"),
        path: "complete".to_string(),
        payload: json!({"prompt": "I will", "maxTokens": 5})
            .as_object()
            .cloned()
            .unwrap(),
    }
}

fn transport() -> ReqwestTransport {
    ReqwestTransport::new(&HttpSettings::default()).unwrap()
}

#[tokio::test]
async fn posts_json_and_parses_reply() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/j2-ultra/complete")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::Json(json!({"prompt": "I will", "maxTokens": 5})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"completions":[{"data":{"text":" ok"},"finishReason":{"reason":"length"}}]}"#)
        .create_async()
        .await;

    let value = transport().send_request(request(server.url())).await.unwrap();
    assert_eq!(value["completions"][0]["data"]["text"], " ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_keeps_status_and_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/j2-ultra/complete")
        .with_status(401)
        .with_body(r#"{"detail":"Forbidden: Bad or missing API token."}"#)
        .create_async()
        .await;

    let err = transport()
        .send_request(request(server.url()))
        .await
        .unwrap_err();
    match err {
        TransportError::Http { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Bad or missing API token"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_invalid_json() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/j2-ultra/complete")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = transport()
        .send_request(request(server.url()))
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::InvalidJson(_)));
    assert_eq!(err.status_code(), 502);
}
