//! Route definitions.

use serde::Deserialize;
use std::borrow::Cow;
use std::collections::HashSet;
use validator::{Validate, ValidationError};

use super::provider::{Provider, ProviderSettings};
use crate::error::GatewayError;
use crate::types::RouteType;

/// The model a route serves and the vendor block needed to reach it.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_model_config"))]
pub struct ModelConfig {
    /// Vendor-side model name, e.g. `j2-ultra`
    #[validate(length(min = 1))]
    pub name: String,
    pub provider: Provider,
    #[serde(default)]
    pub config: Option<ProviderSettings>,
}

impl ModelConfig {
    pub fn new(name: impl Into<String>, provider: Provider) -> Self {
        Self {
            name: name.into(),
            provider,
            config: None,
        }
    }

    pub fn with_config(mut self, config: impl Into<ProviderSettings>) -> Self {
        self.config = Some(config.into());
        self
    }
}

/// One named route exposed by the gateway.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RouteConfig {
    #[validate(length(min = 1), custom(function = "validate_route_name"))]
    pub name: String,
    pub route_type: RouteType,
    #[validate(nested)]
    pub model: ModelConfig,
}

impl RouteConfig {
    pub fn new(name: impl Into<String>, route_type: RouteType, model: ModelConfig) -> Self {
        Self {
            name: name.into(),
            route_type,
            model,
        }
    }

    /// Validate and map failures into the gateway's error type.
    pub fn validate_route(&self) -> Result<(), GatewayError> {
        self.validate()
            .map_err(|e| GatewayError::Configuration(format!("route '{}': {e}", self.name)))
    }
}

/// Whole-gateway configuration: the list of routes to register.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GatewayConfig {
    #[validate(nested)]
    pub routes: Vec<RouteConfig>,
}

impl GatewayConfig {
    /// Parse and validate a JSON document of the form `{"routes": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self, GatewayError> {
        let config: GatewayConfig = serde_json::from_str(json)
            .map_err(|e| GatewayError::Configuration(format!("invalid gateway config: {e}")))?;
        config.validate_config()?;
        Ok(config)
    }

    pub fn validate_config(&self) -> Result<(), GatewayError> {
        self.validate()?;
        let mut seen = HashSet::new();
        for route in &self.routes {
            if !seen.insert(route.name.as_str()) {
                return Err(GatewayError::Configuration(format!(
                    "duplicate route name '{}'",
                    route.name
                )));
            }
        }
        Ok(())
    }
}

fn validate_route_name(name: &str) -> Result<(), ValidationError> {
    if name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(ValidationError::new("route_name").with_message(Cow::Borrowed(
            "route names may only contain letters, digits, '-' and '_'",
        )))
    }
}

fn validate_model_config(model: &ModelConfig) -> Result<(), ValidationError> {
    match &model.config {
        Some(settings) if settings.provider() != model.provider => {
            Err(ValidationError::new("provider_config").with_message(Cow::Owned(format!(
                "provider is '{}' but the config block is for '{}'",
                model.provider,
                settings.provider()
            ))))
        }
        _ => Ok(()),
    }
}
