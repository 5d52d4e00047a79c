//! Response transformation traits
//!
//! Converts vendor response JSON into canonical responses.

use crate::error::GatewayError;
use crate::types::{
    ChatResponse, CompletionResponse, EmbeddingsResponse, ResponseMetadata, RouteType,
};

/// Transform vendor JSON into canonical responses.
///
/// `metadata` carries the served model and route kind; transformers attach it
/// as-is rather than reading those values from the vendor body.
pub trait ResponseTransformer: Send + Sync {
    /// Vendor display name used in error messages
    fn provider_name(&self) -> &str;

    fn transform_completions_response(
        &self,
        _raw: &serde_json::Value,
        _metadata: ResponseMetadata,
    ) -> Result<CompletionResponse, GatewayError> {
        Err(GatewayError::capability_unsupported(
            RouteType::Completions,
            self.provider_name(),
        ))
    }

    fn transform_chat_response(
        &self,
        _raw: &serde_json::Value,
        _metadata: ResponseMetadata,
    ) -> Result<ChatResponse, GatewayError> {
        Err(GatewayError::capability_unsupported(
            RouteType::Chat,
            self.provider_name(),
        ))
    }

    fn transform_embeddings_response(
        &self,
        _raw: &serde_json::Value,
        _metadata: ResponseMetadata,
    ) -> Result<EmbeddingsResponse, GatewayError> {
        Err(GatewayError::capability_unsupported(
            RouteType::Embeddings,
            self.provider_name(),
        ))
    }
}
