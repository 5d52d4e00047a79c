//! Provider identity and provider-specific configuration blocks.

use secrecy::SecretString;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::secrets::deserialize_api_key;

/// Vendors a route can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Ai21Labs,
    OpenAi,
    Anthropic,
    Cohere,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ai21Labs => "ai21labs",
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Cohere => "cohere",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials block for AI21 Labs routes.
#[derive(Debug, Clone, Deserialize)]
pub struct Ai21LabsConfig {
    #[serde(deserialize_with = "deserialize_api_key")]
    pub ai21labs_api_key: SecretString,
}

impl Ai21LabsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            ai21labs_api_key: SecretString::from(api_key.into()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    #[serde(deserialize_with = "deserialize_api_key")]
    pub openai_api_key: SecretString,
    #[serde(default)]
    pub openai_api_base: Option<String>,
    #[serde(default)]
    pub openai_organization: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    #[serde(deserialize_with = "deserialize_api_key")]
    pub anthropic_api_key: SecretString,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CohereConfig {
    #[serde(deserialize_with = "deserialize_api_key")]
    pub cohere_api_key: SecretString,
}

/// The provider-specific block embedded in a route's model section.
///
/// Blocks are told apart by their key field (`ai21labs_api_key`,
/// `openai_api_key`, ...). The block is picked by that field first and then
/// parsed, so key-resolution errors reach the user intact.
#[derive(Debug, Clone)]
pub enum ProviderSettings {
    Ai21Labs(Ai21LabsConfig),
    OpenAi(OpenAiConfig),
    Anthropic(AnthropicConfig),
    Cohere(CohereConfig),
}

/// Key field that identifies each block, in lookup order.
const KEY_FIELDS: [(&str, Provider); 4] = [
    ("ai21labs_api_key", Provider::Ai21Labs),
    ("openai_api_key", Provider::OpenAi),
    ("anthropic_api_key", Provider::Anthropic),
    ("cohere_api_key", Provider::Cohere),
];

impl<'de> Deserialize<'de> for ProviderSettings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let provider = KEY_FIELDS
            .iter()
            .find(|(field, _)| map.contains_key(*field))
            .map(|(_, provider)| *provider)
            .ok_or_else(|| {
                D::Error::custom(
                    "provider config block needs one of ai21labs_api_key, openai_api_key, \
                     anthropic_api_key or cohere_api_key",
                )
            })?;

        let value = serde_json::Value::Object(map);
        let settings = match provider {
            Provider::Ai21Labs => Ai21LabsConfig::deserialize(value).map(Self::Ai21Labs),
            Provider::OpenAi => OpenAiConfig::deserialize(value).map(Self::OpenAi),
            Provider::Anthropic => AnthropicConfig::deserialize(value).map(Self::Anthropic),
            Provider::Cohere => CohereConfig::deserialize(value).map(Self::Cohere),
        };
        settings.map_err(|e| D::Error::custom(format!("{provider} config block: {e}")))
    }
}

impl ProviderSettings {
    /// Vendor this block belongs to.
    pub fn provider(&self) -> Provider {
        match self {
            Self::Ai21Labs(_) => Provider::Ai21Labs,
            Self::OpenAi(_) => Provider::OpenAi,
            Self::Anthropic(_) => Provider::Anthropic,
            Self::Cohere(_) => Provider::Cohere,
        }
    }

    pub fn as_ai21labs(&self) -> Option<&Ai21LabsConfig> {
        match self {
            Self::Ai21Labs(config) => Some(config),
            _ => None,
        }
    }
}

impl From<Ai21LabsConfig> for ProviderSettings {
    fn from(config: Ai21LabsConfig) -> Self {
        Self::Ai21Labs(config)
    }
}
