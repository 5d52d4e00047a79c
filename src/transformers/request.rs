//! Request transformation traits
//!
//! Converts canonical request structs into vendor-specific JSON payloads.

use crate::error::GatewayError;
use crate::types::{ChatRequest, CompletionRequest, EmbeddingsRequest, JsonMap, RouteType};

/// Transform canonical requests into vendor payloads.
///
/// Every method defaults to `CapabilityUnsupported`, so a vendor only
/// implements the operations it actually offers.
pub trait RequestTransformer: Send + Sync {
    /// Vendor display name used in error messages
    fn provider_name(&self) -> &str;

    fn transform_completions(&self, _req: &CompletionRequest) -> Result<JsonMap, GatewayError> {
        Err(GatewayError::capability_unsupported(
            RouteType::Completions,
            self.provider_name(),
        ))
    }

    fn transform_chat(&self, _req: &ChatRequest) -> Result<JsonMap, GatewayError> {
        Err(GatewayError::capability_unsupported(
            RouteType::Chat,
            self.provider_name(),
        ))
    }

    fn transform_embeddings(&self, _req: &EmbeddingsRequest) -> Result<JsonMap, GatewayError> {
        Err(GatewayError::capability_unsupported(
            RouteType::Embeddings,
            self.provider_name(),
        ))
    }
}
