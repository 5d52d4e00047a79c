//! Route and provider configuration
//!
//! Routes are declared once (typically from a JSON document), validated, and
//! handed to adapters at registration time. Adapters copy what they need out
//! of the route and never look at it again.

pub mod http;
pub mod provider;
pub mod route;
pub mod secrets;

pub use http::HttpSettings;
pub use provider::{
    Ai21LabsConfig, AnthropicConfig, CohereConfig, OpenAiConfig, Provider, ProviderSettings,
};
pub use route::{GatewayConfig, ModelConfig, RouteConfig};
pub use secrets::resolve_api_key;
