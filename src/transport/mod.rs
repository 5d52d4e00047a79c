//! HTTP transport abstraction.
//!
//! Adapters never talk to the network directly. They hand a fully built
//! [`TransportRequest`] to an injectable [`HttpTransport`] and get back parsed
//! JSON or a [`TransportError`]. Retry, backoff and timeouts belong to the
//! transport; tests plug in a fake one to observe exactly what was sent.

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

use crate::error::TransportError;
use crate::types::JsonMap;
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// Everything needed for one JSON POST to a vendor.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub headers: HeaderMap,
    pub base_url: String,
    /// Operation path segment, relative to `base_url`
    pub path: String,
    pub payload: JsonMap,
}

impl TransportRequest {
    /// Final URL: `base_url` and `path` joined by exactly one `/`.
    pub fn url(&self) -> String {
        join_url(&self.base_url, &self.path)
    }
}

/// Outbound call used by every adapter.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send_request(
        &self,
        request: TransportRequest,
    ) -> Result<serde_json::Value, TransportError>;
}

/// Join a base URL and a path segment.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}
