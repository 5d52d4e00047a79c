//! Default transport backed by `reqwest`.

use async_trait::async_trait;

use super::{HttpTransport, TransportRequest};
use crate::config::HttpSettings;
use crate::error::{GatewayError, TransportError};

/// POSTs JSON with a shared `reqwest::Client`. No retries.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(settings: &HttpSettings) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(user_agent) = &settings.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder.build().map_err(|e| {
            GatewayError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;
        Ok(Self { client })
    }

    /// Reuse an existing client (connection pool, proxies, TLS config).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send_request(
        &self,
        request: TransportRequest,
    ) -> Result<serde_json::Value, TransportError> {
        let url = request.url();
        tracing::debug!(target: "llmgate::http", url = %url, "sending request");

        let resp = self
            .client
            .post(&url)
            .headers(request.headers)
            .json(&request.payload)
            .send()
            .await
            .map_err(|e| {
                let err = TransportError::from(e);
                tracing::debug!(target: "llmgate::http", url = %url, err = %err, "request error");
                err
            })?;

        let status = resp.status();
        let text = resp.text().await.map_err(TransportError::from)?;
        if !status.is_success() {
            tracing::debug!(target: "llmgate::http", url = %url, status = status.as_u16(), "vendor returned error status");
            return Err(TransportError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        tracing::debug!(target: "llmgate::http", url = %url, status = status.as_u16(), "response received");
        serde_json::from_str(&text).map_err(|e| TransportError::InvalidJson(e.to_string()))
    }
}
