//! Checks every adapter runs on a serialized payload before renaming.
//!
//! They only look at what the caller sent, so a collision produced by the
//! rename step itself can never trip them.

use super::rename::KeyRenameTable;
use crate::error::GatewayError;
use crate::types::{JsonMap, StreamFlag};

/// Routes pin their model; a per-request `model` is refused.
pub fn reject_model_override(payload: &JsonMap) -> Result<(), GatewayError> {
    if payload.contains_key("model") {
        return Err(GatewayError::model_not_permitted());
    }
    Ok(())
}

/// Refuse vendor-native spellings of fields that have a canonical name.
pub fn reject_vendor_spellings(
    payload: &JsonMap,
    table: &KeyRenameTable,
) -> Result<(), GatewayError> {
    match table.find_vendor_spelling(payload) {
        Some((vendor, canonical)) => Err(GatewayError::invalid_parameter(vendor, canonical)),
        None => Ok(()),
    }
}

/// Streaming is never served by this layer, whatever the vendor can do.
pub fn reject_streaming(payload: &JsonMap) -> Result<(), GatewayError> {
    match payload.get("stream") {
        Some(value) if StreamFlag::value_is_enabled(value) => {
            Err(GatewayError::streaming_not_supported())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TABLE: KeyRenameTable = KeyRenameTable::new(&[("candidate_count", "numResults")]);

    fn map(value: serde_json::Value) -> JsonMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn model_override_is_refused() {
        let err = reject_model_override(&map(json!({"model": "x"}))).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidParameter { ref param, .. } if param == "model"));
        assert!(reject_model_override(&map(json!({"prompt": "x"}))).is_ok());
    }

    #[test]
    fn vendor_spelling_is_refused_with_suggestion() {
        let err = reject_vendor_spellings(&map(json!({"numResults": 2})), &TABLE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter numResults. Use candidate_count instead."
        );
        assert!(reject_vendor_spellings(&map(json!({"candidate_count": 2})), &TABLE).is_ok());
    }

    #[test]
    fn only_enabled_stream_is_refused() {
        assert!(reject_streaming(&map(json!({"stream": true}))).is_err());
        assert!(reject_streaming(&map(json!({"stream": "True"}))).is_err());
        assert!(reject_streaming(&map(json!({"stream": false}))).is_ok());
        assert!(reject_streaming(&map(json!({}))).is_ok());
    }
}
