//! Client-facing error rendering.
//!
//! The dispatch layer turns any [`GatewayError`] into an [`ErrorBody`] with a
//! stable status class and a message that names the field or route involved.

use super::types::GatewayError;
use serde::Serialize;

/// Serializable error payload, shaped like `{"status": 422, "detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub detail: String,
}

impl From<&GatewayError> for ErrorBody {
    fn from(err: &GatewayError) -> Self {
        Self {
            status: err.status_code(),
            detail: err.to_string(),
        }
    }
}

impl GatewayError {
    /// Render this error the way it is returned to the gateway's caller.
    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody::from(self)
    }
}
