//! Text completion request/response types

use serde::{Deserialize, Serialize};

use super::JsonMap;
use super::common::{CandidateMetadata, ResponseMetadata, StreamFlag};
use crate::error::GatewayError;

/// Canonical completion request.
///
/// Unset optional fields are omitted when serialized: absence, not `null`,
/// means "not specified". Fields the schema does not know land in `extra`
/// and are forwarded as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<StreamFlag>,
    /// Per-request model override. Routes pin their model, so adapters reject it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl CompletionRequest {
    /// Declared field names; `extra` must not reuse them.
    pub const FIELDS: [&'static str; 7] = [
        "prompt",
        "stop",
        "candidate_count",
        "max_tokens",
        "temperature",
        "stream",
        "model",
    ];

    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn with_candidate_count(mut self, count: u32) -> Self {
        self.candidate_count = Some(count);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_stream(mut self, stream: impl Into<StreamFlag>) -> Self {
        self.stream = Some(stream.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Attach a vendor-opaque field.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Serialize into an ordered key/value map, leaving out unset fields.
    ///
    /// An extra field spelled like a declared one would overwrite it when
    /// flattened, so it is refused instead.
    pub fn to_payload(&self) -> Result<JsonMap, GatewayError> {
        if let Some(key) = Self::FIELDS.iter().find(|f| self.extra.contains_key(**f)) {
            return Err(GatewayError::shadowed_parameter(*key));
        }
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(GatewayError::Parse(format!(
                "completion request serialized to a non-object value: {other}"
            ))),
        }
    }
}

/// One generated candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCandidate {
    pub text: String,
    pub metadata: CandidateMetadata,
}

/// Canonical completion response. Candidates keep the vendor's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub candidates: Vec<CompletionCandidate>,
    pub metadata: ResponseMetadata,
}

impl CompletionResponse {
    /// Text of the first candidate.
    pub fn text(&self) -> Option<&str> {
        self.candidates.first().map(|c| c.text.as_str())
    }
}
