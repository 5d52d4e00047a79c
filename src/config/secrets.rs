//! API key resolution.
//!
//! A configured key may be written three ways:
//! - `$NAME` reads the environment variable `NAME`,
//! - a path to an existing file reads the file (trimmed),
//! - anything else is the key itself.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::error::GatewayError;

pub fn resolve_api_key(raw: &str) -> Result<SecretString, GatewayError> {
    let raw = raw.trim();
    if let Some(var) = raw.strip_prefix('$') {
        return std::env::var(var)
            .map(|value| SecretString::from(value.trim().to_string()))
            .map_err(|_| {
                GatewayError::Configuration(format!(
                    "Environment variable {var} referenced by an API key is not set"
                ))
            });
    }

    let path = Path::new(raw);
    if !raw.is_empty() && path.is_file() {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GatewayError::Configuration(format!("Failed to read API key file: {e}"))
        })?;
        return Ok(SecretString::from(contents.trim().to_string()));
    }

    Ok(SecretString::from(raw.to_string()))
}

/// `deserialize_with` hook that resolves the key while the config is parsed.
pub(crate) fn deserialize_api_key<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    resolve_api_key(&raw).map_err(serde::de::Error::custom)
}
