//! Embeddings request/response types

use serde::{Deserialize, Serialize};

use super::JsonMap;
use super::common::ResponseMetadata;

/// Text to embed: one string or a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingsInput {
    Single(String),
    Batch(Vec<String>),
}

impl EmbeddingsInput {
    /// Inputs as a list, regardless of how they were sent.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(text) => vec![text],
            Self::Batch(texts) => texts,
        }
    }
}

/// Canonical embeddings request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingsRequest {
    pub text: EmbeddingsInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl EmbeddingsRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: EmbeddingsInput::Single(text.into()),
            model: None,
            extra: JsonMap::new(),
        }
    }

    pub fn batch(texts: Vec<String>) -> Self {
        Self {
            text: EmbeddingsInput::Batch(texts),
            model: None,
            extra: JsonMap::new(),
        }
    }
}

/// Canonical embeddings response; one vector per input, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingsResponse {
    pub embeddings: Vec<Vec<f64>>,
    pub metadata: ResponseMetadata,
}
