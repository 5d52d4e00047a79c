//! Recording transport double
//!
//! Returns a canned reply and keeps every request it was handed, so tests can
//! assert both on what was sent and on whether anything was sent at all.

use async_trait::async_trait;
use llmgate::error::TransportError;
use llmgate::transport::{HttpTransport, TransportRequest};
use std::sync::Mutex;

pub struct MockTransport {
    reply: Result<serde_json::Value, TransportError>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn replying(reply: serde_json::Value) -> Self {
        Self {
            reply: Ok(reply),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: TransportError) -> Self {
        Self {
            reply: Err(err),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send_request(
        &self,
        request: TransportRequest,
    ) -> Result<serde_json::Value, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}
