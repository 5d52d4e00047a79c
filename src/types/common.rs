//! Types shared by all operation kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of operation a route serves; doubles as the capability name.
///
/// Serialized as `completions`, `chat` or `embeddings`. The gateway's long
/// route-type identifiers (`llm/v1/completions`, ...) are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    #[serde(alias = "llm/v1/completions")]
    Completions,
    #[serde(alias = "llm/v1/chat")]
    Chat,
    #[serde(alias = "llm/v1/embeddings")]
    Embeddings,
}

impl RouteType {
    pub const ALL: [RouteType; 3] = [Self::Completions, Self::Chat, Self::Embeddings];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completions => "completions",
            Self::Chat => "chat",
            Self::Embeddings => "embeddings",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Streaming indicator as callers actually send it.
///
/// Clients are inconsistent here: some send a JSON boolean, others the string
/// `"true"`. Both spellings are accepted and compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreamFlag {
    Bool(bool),
    Text(String),
}

impl StreamFlag {
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        }
    }

    /// Same test applied to a raw JSON value from a serialized payload.
    pub fn value_is_enabled(value: &serde_json::Value) -> bool {
        serde_json::from_value::<StreamFlag>(value.clone())
            .map(|flag| flag.is_enabled())
            .unwrap_or(false)
    }
}

impl From<bool> for StreamFlag {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Per-candidate metadata. Every candidate says why generation stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMetadata {
    pub finish_reason: String,
}

impl CandidateMetadata {
    pub fn new(finish_reason: impl Into<String>) -> Self {
        Self {
            finish_reason: finish_reason.into(),
        }
    }
}

/// Response-level metadata: which model served the request and for which route kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub model: String,
    pub route_type: RouteType,
}

impl ResponseMetadata {
    pub fn new(model: impl Into<String>, route_type: RouteType) -> Self {
        Self {
            model: model.into(),
            route_type,
        }
    }
}
