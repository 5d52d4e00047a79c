//! ProviderCapabilities structure

use crate::types::RouteType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderCapabilities {
    pub completions: bool,
    pub chat: bool,
    pub embeddings: bool,
}

impl ProviderCapabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_completions(mut self) -> Self {
        self.completions = true;
        self
    }
    pub fn with_chat(mut self) -> Self {
        self.chat = true;
        self
    }
    pub fn with_embeddings(mut self) -> Self {
        self.embeddings = true;
        self
    }

    pub fn supports(&self, route_type: RouteType) -> bool {
        match route_type {
            RouteType::Completions => self.completions,
            RouteType::Chat => self.chat,
            RouteType::Embeddings => self.embeddings,
        }
    }

    /// Route kinds this provider serves, in declaration order.
    pub fn supported(&self) -> Vec<RouteType> {
        RouteType::ALL
            .into_iter()
            .filter(|rt| self.supports(*rt))
            .collect()
    }
}
