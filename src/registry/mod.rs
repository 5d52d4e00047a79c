//! Route registry
//!
//! Maps route names to adapters built once at startup and dispatches
//! canonical requests to them. Lookups are read-only, so a registry behind an
//! `Arc` serves concurrent requests without locking.

pub mod factory;

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::traits::ProviderAdapter;
use crate::transport::HttpTransport;
use crate::types::{
    ChatRequest, ChatResponse, CompletionRequest, CompletionResponse, EmbeddingsRequest,
    EmbeddingsResponse, RouteType,
};

pub use factory::build_adapter;

/// One registered route.
#[derive(Clone)]
pub struct RouteRecord {
    pub name: String,
    pub route_type: RouteType,
    pub adapter: Arc<dyn ProviderAdapter>,
}

impl std::fmt::Debug for RouteRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteRecord")
            .field("name", &self.name)
            .field("route_type", &self.route_type)
            .field("provider", &self.adapter.provider_id())
            .finish()
    }
}

#[derive(Default, Debug)]
pub struct RouteRegistry {
    by_name: HashMap<String, RouteRecord>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `config` and build every route's adapter.
    ///
    /// The first failing route aborts the whole registration.
    pub fn from_config(
        config: &GatewayConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, GatewayError> {
        config.validate_config()?;
        let mut registry = Self::new();
        for route in &config.routes {
            let adapter = build_adapter(route, transport.clone())?;
            registry.register(route.name.clone(), route.route_type, adapter);
        }
        tracing::info!(
            target: "llmgate::registry",
            routes = registry.by_name.len(),
            "routes registered"
        );
        Ok(registry)
    }

    /// Register a prebuilt adapter. A route with the same name is replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        route_type: RouteType,
        adapter: Arc<dyn ProviderAdapter>,
    ) {
        let name = name.into();
        tracing::debug!(
            target: "llmgate::registry",
            route = %name,
            route_type = %route_type,
            provider = adapter.provider_id(),
            "registering route"
        );
        self.by_name.insert(
            name.clone(),
            RouteRecord {
                name,
                route_type,
                adapter,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&RouteRecord> {
        self.by_name.get(name)
    }

    /// All routes, sorted by name.
    pub fn routes(&self) -> Vec<&RouteRecord> {
        let mut routes: Vec<_> = self.by_name.values().collect();
        routes.sort_by(|a, b| a.name.cmp(&b.name));
        routes
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub async fn completions(
        &self,
        route: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, GatewayError> {
        self.resolve(route, RouteType::Completions)?
            .completions(request)
            .await
    }

    pub async fn chat(
        &self,
        route: &str,
        request: &ChatRequest,
    ) -> Result<ChatResponse, GatewayError> {
        self.resolve(route, RouteType::Chat)?.chat(request).await
    }

    pub async fn embeddings(
        &self,
        route: &str,
        request: &EmbeddingsRequest,
    ) -> Result<EmbeddingsResponse, GatewayError> {
        self.resolve(route, RouteType::Embeddings)?
            .embeddings(request)
            .await
    }

    fn resolve(
        &self,
        route: &str,
        wanted: RouteType,
    ) -> Result<&Arc<dyn ProviderAdapter>, GatewayError> {
        let record = self
            .by_name
            .get(route)
            .ok_or_else(|| GatewayError::RouteNotFound(route.to_string()))?;
        if record.route_type != wanted {
            return Err(GatewayError::capability_unsupported(
                wanted,
                record.adapter.display_name(),
            ));
        }
        Ok(&record.adapter)
    }
}
