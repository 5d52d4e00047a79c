//! # llmgate - provider adapters for a multi-vendor LLM gateway
//!
//! Clients speak one canonical schema for completions, chat and embeddings.
//! Each vendor gets an adapter that validates a canonical request, renames
//! its fields to the vendor's spelling, sends it through an injectable
//! [`transport::HttpTransport`] and reshapes the vendor reply.
//!
#![deny(unsafe_code)]

//! ## Quick Start
//!
//! ```rust,ignore
//! use llmgate::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), GatewayError> {
//!     let config = GatewayConfig::from_json_str(r#"{
//!         "routes": [{
//!             "name": "completions",
//!             "route_type": "llm/v1/completions",
//!             "model": {
//!                 "name": "j2-ultra",
//!                 "provider": "ai21labs",
//!                 "config": {"ai21labs_api_key": "$AI21LABS_API_KEY"}
//!             }
//!         }]
//!     }"#)?;
//!
//!     let transport = Arc::new(ReqwestTransport::new(&HttpSettings::default())?);
//!     let registry = RouteRegistry::from_config(&config, transport)?;
//!
//!     let request = CompletionRequest::new("I will").with_max_tokens(16);
//!     let response = registry.completions("completions", &request).await?;
//!     println!("{}", response.text().unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every failure is one [`error::GatewayError`]. Client mistakes map to 422,
//! unsupported operations to 404, and vendor HTTP errors keep their status.

pub mod config;
pub mod error;
pub mod executors;
pub mod providers;
pub mod registry;
pub mod telemetry;
pub mod traits;
pub mod transformers;
pub mod transport;
pub mod types;

pub mod prelude {
    pub use crate::config::{
        Ai21LabsConfig, GatewayConfig, HttpSettings, ModelConfig, Provider, ProviderSettings,
        RouteConfig,
    };
    pub use crate::error::{ErrorBody, ErrorCategory, GatewayError, TransportError};
    pub use crate::providers::Ai21LabsProvider;
    pub use crate::registry::RouteRegistry;
    pub use crate::traits::{ProviderAdapter, ProviderCapabilities};
    pub use crate::transport::{HttpTransport, ReqwestTransport, TransportRequest};
    pub use crate::types::*;
}

pub use error::{GatewayError, TransportError};
pub use registry::RouteRegistry;
pub use traits::ProviderAdapter;
