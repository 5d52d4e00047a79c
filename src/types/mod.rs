//! Canonical schema
//!
//! Vendor-neutral request and response shapes for the three operation kinds
//! a route can serve. Adapters translate from and to these types; they never
//! mutate a caller's value in place.

pub mod chat;
pub mod common;
pub mod completions;
pub mod embeddings;

pub use chat::{ChatCandidate, ChatMessage, ChatRequest, ChatResponse};
pub use common::{CandidateMetadata, ResponseMetadata, RouteType, StreamFlag};
pub use completions::{CompletionCandidate, CompletionRequest, CompletionResponse};
pub use embeddings::{EmbeddingsInput, EmbeddingsRequest, EmbeddingsResponse};

/// Open map of JSON fields, used for vendor-opaque extras and at the transport boundary.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
