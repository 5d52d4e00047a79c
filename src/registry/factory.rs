//! Adapter factory

use std::sync::Arc;

use crate::config::{Provider, RouteConfig};
use crate::error::GatewayError;
use crate::providers::Ai21LabsProvider;
use crate::traits::ProviderAdapter;
use crate::transport::HttpTransport;

/// Build the adapter for `route` according to its declared provider.
pub fn build_adapter(
    route: &RouteConfig,
    transport: Arc<dyn HttpTransport>,
) -> Result<Arc<dyn ProviderAdapter>, GatewayError> {
    match route.model.provider {
        Provider::Ai21Labs => Ok(Arc::new(Ai21LabsProvider::new(route, transport)?)),
        other @ (Provider::OpenAi | Provider::Anthropic | Provider::Cohere) => {
            Err(GatewayError::Configuration(format!(
                "No adapter is available for provider '{other}' (route '{}')",
                route.name
            )))
        }
    }
}
