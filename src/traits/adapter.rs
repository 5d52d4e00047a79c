//! Provider adapter trait

use async_trait::async_trait;

use super::capabilities::ProviderCapabilities;
use crate::error::GatewayError;
use crate::types::{
    ChatRequest, ChatResponse, CompletionRequest, CompletionResponse, EmbeddingsRequest,
    EmbeddingsResponse, RouteType,
};

/// One vendor's translation between the canonical schema and its wire API.
///
/// Every operation defaults to `CapabilityUnsupported` and returns before any
/// network call. Adapters override only what the vendor offers.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Stable lowercase identifier, e.g. `ai21labs`
    fn provider_id(&self) -> &'static str;

    /// Name used in client-facing messages
    fn display_name(&self) -> &'static str {
        self.provider_id()
    }

    fn capabilities(&self) -> ProviderCapabilities;

    async fn completions(
        &self,
        _request: &CompletionRequest,
    ) -> Result<CompletionResponse, GatewayError> {
        Err(GatewayError::capability_unsupported(
            RouteType::Completions,
            self.display_name(),
        ))
    }

    async fn chat(&self, _request: &ChatRequest) -> Result<ChatResponse, GatewayError> {
        Err(GatewayError::capability_unsupported(
            RouteType::Chat,
            self.display_name(),
        ))
    }

    async fn embeddings(
        &self,
        _request: &EmbeddingsRequest,
    ) -> Result<EmbeddingsResponse, GatewayError> {
        Err(GatewayError::capability_unsupported(
            RouteType::Embeddings,
            self.display_name(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;

    struct Bare;

    #[async_trait]
    impl ProviderAdapter for Bare {
        fn provider_id(&self) -> &'static str {
            "bare"
        }

        fn capabilities(&self) -> ProviderCapabilities {
            ProviderCapabilities::new()
        }
    }

    #[tokio::test]
    async fn defaults_report_unsupported() {
        let err = Bare
            .chat(&ChatRequest::new(vec![ChatMessage::user("hi")]))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "The chat route is not available for bare models.");

        let err = Bare
            .completions(&CompletionRequest::new("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::CapabilityUnsupported { ref route, .. } if route == "completions"));
    }
}
