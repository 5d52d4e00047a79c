//! AI21 Labs client

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use std::sync::Arc;

use super::transformers::{Ai21RequestTransformer, Ai21ResponseTransformer};
use super::{COMPLETIONS_PATH, DEFAULT_BASE_URL, DISPLAY_NAME, PROVIDER_ID};
use crate::config::{Ai21LabsConfig, HttpSettings, RouteConfig};
use crate::error::GatewayError;
use crate::executors::{CompletionsExecutor, HttpCompletionsExecutor};
use crate::traits::{ProviderAdapter, ProviderCapabilities};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{CompletionRequest, CompletionResponse, ResponseMetadata};

/// Adapter for one AI21 Labs route.
///
/// Built once per route and shared; holds the derived headers, base URL and
/// the transport handle, nothing mutable.
pub struct Ai21LabsProvider {
    route_name: String,
    model: String,
    base_url: String,
    executor: HttpCompletionsExecutor,
}

impl std::fmt::Debug for Ai21LabsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ai21LabsProvider")
            .field("route_name", &self.route_name)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Ai21LabsProvider {
    /// Build the adapter for `route`, sending through `transport`.
    pub fn new(route: &RouteConfig, transport: Arc<dyn HttpTransport>) -> Result<Self, GatewayError> {
        let config = route
            .model
            .config
            .as_ref()
            .and_then(|settings| settings.as_ai21labs())
            .ok_or_else(|| {
                GatewayError::ConfigMismatch(format!(
                    "Invalid config type for route '{}': expected an ai21labs config block \
                     containing 'ai21labs_api_key'",
                    route.name
                ))
            })?;

        let model = route.model.name.clone();
        let base_url = format!("{DEFAULT_BASE_URL}/{model}/");
        let headers = build_headers(config)?;

        tracing::debug!(
            target: "llmgate::provider",
            provider = PROVIDER_ID,
            route = %route.name,
            model = %model,
            base_url = %base_url,
            "adapter constructed"
        );

        let executor = HttpCompletionsExecutor {
            provider_id: PROVIDER_ID.to_string(),
            transport,
            request_transformer: Arc::new(Ai21RequestTransformer),
            response_transformer: Arc::new(Ai21ResponseTransformer),
            headers,
            base_url: base_url.clone(),
            path: COMPLETIONS_PATH.to_string(),
            metadata: ResponseMetadata::new(model.clone(), route.route_type),
        };

        Ok(Self {
            route_name: route.name.clone(),
            model,
            base_url,
            executor,
        })
    }

    /// Same as [`Self::new`] with the default `reqwest` transport.
    pub fn from_route(route: &RouteConfig) -> Result<Self, GatewayError> {
        let transport = ReqwestTransport::new(&HttpSettings::default())?;
        Self::new(route, Arc::new(transport))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Vendor base URL, ending with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn route_name(&self) -> &str {
        &self.route_name
    }
}

fn build_headers(config: &Ai21LabsConfig) -> Result<HeaderMap, GatewayError> {
    let mut auth = HeaderValue::from_str(&format!(
        "Bearer {}",
        config.ai21labs_api_key.expose_secret()
    ))
    .map_err(|_| {
        GatewayError::Configuration(
            "ai21labs_api_key contains characters not allowed in an HTTP header".to_string(),
        )
    })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

#[async_trait]
impl ProviderAdapter for Ai21LabsProvider {
    fn provider_id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn display_name(&self) -> &'static str {
        DISPLAY_NAME
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities::new().with_completions()
    }

    async fn completions(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, GatewayError> {
        self.executor.execute(request).await
    }
}
