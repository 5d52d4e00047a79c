//! Completions executor

use reqwest::header::HeaderMap;
use std::sync::Arc;
use tracing::Instrument;

use crate::error::GatewayError;
use crate::transformers::{RequestTransformer, ResponseTransformer};
use crate::transport::{HttpTransport, TransportRequest};
use crate::types::{CompletionRequest, CompletionResponse, ResponseMetadata};

#[async_trait::async_trait]
pub trait CompletionsExecutor: Send + Sync {
    async fn execute(&self, req: &CompletionRequest) -> Result<CompletionResponse, GatewayError>;
}

/// Generic HTTP-based completions executor.
///
/// Holds only immutable data, so one instance serves any number of
/// concurrent requests.
pub struct HttpCompletionsExecutor {
    pub provider_id: String,
    pub transport: Arc<dyn HttpTransport>,
    pub request_transformer: Arc<dyn RequestTransformer>,
    pub response_transformer: Arc<dyn ResponseTransformer>,
    pub headers: HeaderMap,
    pub base_url: String,
    pub path: String,
    pub metadata: ResponseMetadata,
}

#[async_trait::async_trait]
impl CompletionsExecutor for HttpCompletionsExecutor {
    async fn execute(&self, req: &CompletionRequest) -> Result<CompletionResponse, GatewayError> {
        let request_id = uuid::Uuid::new_v4();
        let span = tracing::debug_span!(
            target: "llmgate::executor",
            "completions",
            provider = %self.provider_id,
            model = %self.metadata.model,
            request_id = %request_id,
        );

        async {
            let payload = self.request_transformer.transform_completions(req)?;

            let request = TransportRequest {
                headers: self.headers.clone(),
                base_url: self.base_url.clone(),
                path: self.path.clone(),
                payload,
            };
            tracing::debug!(target: "llmgate::executor", path = %self.path, "dispatching to transport");

            let raw = self.transport.send_request(request).await.map_err(|e| {
                tracing::debug!(target: "llmgate::executor", status = e.status_code(), err = %e, "transport failed");
                GatewayError::from(e)
            })?;

            let response = self
                .response_transformer
                .transform_completions_response(&raw, self.metadata.clone())?;
            tracing::debug!(
                target: "llmgate::executor",
                candidates = response.candidates.len(),
                "completion reshaped"
            );
            Ok::<_, GatewayError>(response)
        }
        .instrument(span)
        .await
    }
}
