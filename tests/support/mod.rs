//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod mock_transport;

use llmgate::config::{Ai21LabsConfig, ModelConfig, Provider, RouteConfig};
use llmgate::types::RouteType;

/// An AI21 completions route for model `j2-ultra` with key `test-key`.
pub fn ai21_route(name: &str) -> RouteConfig {
    RouteConfig::new(
        name,
        RouteType::Completions,
        ModelConfig::new("j2-ultra", Provider::Ai21Labs).with_config(Ai21LabsConfig::new("test-key")),
    )
}
