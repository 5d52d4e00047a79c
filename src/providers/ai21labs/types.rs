//! AI21 wire types

use serde::Deserialize;

/// Body of a successful `POST /{model}/complete`.
#[derive(Debug, Clone, Deserialize)]
pub struct Ai21CompletionResponse {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub completions: Vec<Ai21Completion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ai21Completion {
    pub data: Ai21CompletionData,
    #[serde(rename = "finishReason")]
    pub finish_reason: Ai21FinishReason,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ai21CompletionData {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ai21FinishReason {
    pub reason: String,
}
