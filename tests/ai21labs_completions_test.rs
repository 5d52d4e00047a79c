//! AI21 Labs adapter against a recording transport
//!
//! Covers the full completions pipeline plus the paths that must fail before
//! any network call.

mod support;

use llmgate::error::{GatewayError, TransportError};
use llmgate::providers::Ai21LabsProvider;
use llmgate::traits::ProviderAdapter;
use llmgate::types::{
    ChatMessage, ChatRequest, CompletionRequest, EmbeddingsRequest, JsonMap, RouteType,
};
use proptest::prelude::*;
use reqwest::header::AUTHORIZATION;
use serde_json::json;
use std::sync::Arc;
use support::ai21_route;
use support::mock_transport::MockTransport;

fn provider(transport: Arc<MockTransport>) -> Ai21LabsProvider {
    Ai21LabsProvider::new(&ai21_route("completions"), transport).unwrap()
}

fn one_completion() -> serde_json::Value {
    json!({
        "id": "req-1",
        "completions": [
            {"data": {"text": " complete this"}, "finishReason": {"reason": "length"}}
        ]
    })
}

#[tokio::test]
async fn completes_and_reshapes() {
    let transport = Arc::new(MockTransport::replying(one_completion()));
    let provider = provider(transport.clone());

    let resp = provider
        .completions(&CompletionRequest::new("I will").with_max_tokens(5))
        .await
        .unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(
        serde_json::Value::Object(sent.payload.clone()),
        json!({"prompt": "I will", "maxTokens": 5})
    );
    assert_eq!(sent.path, "complete");
    assert_eq!(sent.base_url, "https://api.ai21.com/studio/v1/j2-ultra/");
    assert_eq!(sent.url(), "https://api.ai21.com/studio/v1/j2-ultra/complete");
    assert_eq!(sent.headers[AUTHORIZATION], "Bearer test-key");

    assert_eq!(
        serde_json::to_value(&resp).unwrap(),
        json!({
            "candidates": [{"text": " complete this", "metadata": {"finish_reason": "length"}}],
            "metadata": {"model": "j2-ultra", "route_type": "completions"}
        })
    );
}

#[tokio::test]
async fn keeps_candidate_order() {
    let transport = Arc::new(MockTransport::replying(json!({
        "completions": [
            {"data": {"text": "A"}, "finishReason": {"reason": "length"}},
            {"data": {"text": "B"}, "finishReason": {"reason": "endoftext"}},
            {"data": {"text": "C"}, "finishReason": {"reason": "length"}}
        ]
    })));
    let resp = provider(transport)
        .completions(&CompletionRequest::new("x").with_candidate_count(3))
        .await
        .unwrap();
    let texts: Vec<_> = resp.candidates.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["A", "B", "C"]);
}

#[tokio::test]
async fn vendor_spelling_is_rejected_without_transport_call() {
    let transport = Arc::new(MockTransport::replying(one_completion()));
    let provider = provider(transport.clone());

    let req = CompletionRequest::new("I will").with_extra("maxTokens", json!(5));
    let err = provider.completions(&req).await.unwrap_err();

    assert!(matches!(err, GatewayError::InvalidParameter { .. }));
    assert_eq!(err.status_code(), 422);
    assert!(err.to_string().contains("max_tokens"));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn stream_is_rejected_without_transport_call() {
    let transport = Arc::new(MockTransport::replying(one_completion()));
    let provider = provider(transport.clone());

    for req in [
        CompletionRequest::new("x").with_stream(true),
        CompletionRequest::new("x").with_stream(llmgate::types::StreamFlag::Text("TRUE".into())),
    ] {
        let err = provider.completions(&req).await.unwrap_err();
        assert!(matches!(err, GatewayError::UnsupportedOption { ref option, .. } if option == "stream"));
        assert_eq!(err.status_code(), 422);
    }
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn extra_field_cannot_override_declared_one() {
    let transport = Arc::new(MockTransport::replying(one_completion()));
    let provider = provider(transport.clone());

    let req = CompletionRequest::new("hi")
        .with_stream(true)
        .with_extra("stream", json!(false));
    let err = provider.completions(&req).await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidParameter { ref param, .. } if param == "stream"));

    let req = CompletionRequest::new("hi")
        .with_max_tokens(5)
        .with_extra("max_tokens", json!(999));
    let err = provider.completions(&req).await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidParameter { ref param, .. } if param == "max_tokens"));
    assert_eq!(err.status_code(), 422);

    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn stream_false_is_forwarded() {
    let transport = Arc::new(MockTransport::replying(one_completion()));
    provider(transport.clone())
        .completions(&CompletionRequest::new("x").with_stream(false))
        .await
        .unwrap();
    assert_eq!(transport.last_request().unwrap().payload["stream"], json!(false));
}

#[tokio::test]
async fn model_override_is_rejected_without_transport_call() {
    let transport = Arc::new(MockTransport::replying(one_completion()));
    let err = provider(transport.clone())
        .completions(&CompletionRequest::new("x").with_model("j2-mid"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("'model' is not permitted"));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn chat_and_embeddings_are_unsupported() {
    let transport = Arc::new(MockTransport::replying(one_completion()));
    let provider = provider(transport.clone());

    let err = provider
        .chat(&ChatRequest::new(vec![ChatMessage::user("hi")]))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(
        err.to_string(),
        "The chat route is not available for AI21Labs models."
    );

    let err = provider
        .embeddings(&EmbeddingsRequest::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::CapabilityUnsupported { ref route, .. } if route == "embeddings"));

    assert_eq!(transport.calls(), 0);
    assert!(!provider.capabilities().supports(RouteType::Chat));
}

#[tokio::test]
async fn completion_without_finish_reason_is_rejected() {
    let transport = Arc::new(MockTransport::replying(json!({
        "completions": [{"data": {"text": "x"}}]
    })));
    let err = provider(transport)
        .completions(&CompletionRequest::new("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Parse(_)));
    assert_eq!(err.status_code(), 502);
}

#[tokio::test]
async fn transport_errors_propagate_unchanged() {
    let upstream = TransportError::Http {
        status: 429,
        body: r#"{"detail":"rate limited"}"#.to_string(),
    };
    let transport = Arc::new(MockTransport::failing(upstream.clone()));
    let err = provider(transport)
        .completions(&CompletionRequest::new("x"))
        .await
        .unwrap_err();
    assert_eq!(err, GatewayError::Transport(upstream));
    assert_eq!(err.status_code(), 429);
}

#[tokio::test]
async fn caller_request_is_not_mutated() {
    let transport = Arc::new(MockTransport::replying(one_completion()));
    let req = CompletionRequest::new("x")
        .with_max_tokens(7)
        .with_stop(vec!["\n".into()]);
    let before = req.clone();
    provider(transport).completions(&req).await.unwrap();
    assert_eq!(req, before);
}

#[tokio::test]
#[tracing_test::traced_test]
async fn credential_never_reaches_logs() {
    let transport = Arc::new(MockTransport::replying(one_completion()));
    let provider = provider(transport);
    provider
        .completions(&CompletionRequest::new("x"))
        .await
        .unwrap();
    assert!(logs_contain("adapter constructed"));
    assert!(!logs_contain("test-key"));
}

fn renamed_payload(req: &CompletionRequest) -> JsonMap {
    let transport = Arc::new(MockTransport::replying(one_completion()));
    tokio_test::block_on(provider(transport.clone()).completions(req)).unwrap();
    transport.last_request().unwrap().payload
}

proptest! {
    #[test]
    fn renamed_values_are_preserved(
        prompt in ".{0,40}",
        max_tokens in proptest::option::of(0u32..10_000),
        count in proptest::option::of(1u32..16),
        stop in proptest::option::of(proptest::collection::vec("[a-z#\\n]{1,5}", 0..4)),
    ) {
        let mut req = CompletionRequest::new(prompt.clone());
        req.max_tokens = max_tokens;
        req.candidate_count = count;
        req.stop = stop.clone();

        let payload = renamed_payload(&req);

        for canonical in ["max_tokens", "candidate_count", "stop"] {
            prop_assert!(!payload.contains_key(canonical));
        }
        prop_assert_eq!(payload.get("prompt").cloned(), Some(json!(prompt)));
        prop_assert_eq!(payload.get("maxTokens").cloned(), max_tokens.map(|v| json!(v)));
        prop_assert_eq!(payload.get("numResults").cloned(), count.map(|v| json!(v)));
        prop_assert_eq!(payload.get("stopSequences").cloned(), stop.map(|v| json!(v)));
    }
}
