//! Transformers for AI21 Labs completions

use serde::Deserialize;

use super::DISPLAY_NAME;
use super::types::Ai21CompletionResponse;
use crate::error::GatewayError;
use crate::transformers::validation::{
    reject_model_override, reject_streaming, reject_vendor_spellings,
};
use crate::transformers::{KeyRenameTable, RequestTransformer, ResponseTransformer};
use crate::types::{
    CandidateMetadata, CompletionCandidate, CompletionRequest, CompletionResponse, JsonMap,
    ResponseMetadata,
};

/// Canonical completion fields that AI21 spells differently.
pub const AI21_COMPLETIONS_RENAMES: KeyRenameTable = KeyRenameTable::new(&[
    ("stop", "stopSequences"),
    ("candidate_count", "numResults"),
    ("max_tokens", "maxTokens"),
]);

#[derive(Debug, Clone, Copy, Default)]
pub struct Ai21RequestTransformer;

impl RequestTransformer for Ai21RequestTransformer {
    fn provider_name(&self) -> &str {
        DISPLAY_NAME
    }

    fn transform_completions(&self, req: &CompletionRequest) -> Result<JsonMap, GatewayError> {
        let payload = req.to_payload()?;
        reject_model_override(&payload)?;
        reject_vendor_spellings(&payload, &AI21_COMPLETIONS_RENAMES)?;
        reject_streaming(&payload)?;
        Ok(AI21_COMPLETIONS_RENAMES.rename(&payload))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ai21ResponseTransformer;

impl ResponseTransformer for Ai21ResponseTransformer {
    fn provider_name(&self) -> &str {
        DISPLAY_NAME
    }

    fn transform_completions_response(
        &self,
        raw: &serde_json::Value,
        metadata: ResponseMetadata,
    ) -> Result<CompletionResponse, GatewayError> {
        let parsed = Ai21CompletionResponse::deserialize(raw).map_err(|e| {
            GatewayError::Parse(format!("unexpected {DISPLAY_NAME} completion body: {e}"))
        })?;
        if parsed.completions.is_empty() {
            return Err(GatewayError::Parse(format!(
                "{DISPLAY_NAME} returned no completions"
            )));
        }

        let candidates = parsed
            .completions
            .into_iter()
            .map(|c| CompletionCandidate {
                text: c.data.text,
                metadata: CandidateMetadata::new(c.finish_reason.reason),
            })
            .collect();

        Ok(CompletionResponse {
            candidates,
            metadata,
        })
    }
}
