//! Core error types.

use crate::types::RouteType;

/// Coarse classification used by the dispatch layer to pick a response class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller sent something the gateway will not forward.
    Client,
    /// The route or vendor does not offer the requested operation.
    Unsupported,
    /// The gateway itself is misconfigured.
    Configuration,
    /// The vendor or the network failed.
    Upstream,
}

/// Failures raised by the transport collaborator.
///
/// Adapters never reinterpret these; they travel upward unchanged inside
/// [`GatewayError::Transport`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The vendor answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The vendor answered 2xx but the body was not JSON.
    #[error("Invalid JSON in response body: {0}")]
    InvalidJson(String),
}

impl TransportError {
    /// Status class the dispatch layer should report for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Http { status, .. } => *status,
            Self::Network(_) | Self::InvalidJson(_) => 502,
            Self::Timeout(_) => 504,
        }
    }
}

/// Every outcome an adapter or the route registry can fail with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The route's provider block is missing or belongs to another vendor.
    #[error("Configuration mismatch: {0}")]
    ConfigMismatch(String),

    /// The route or gateway configuration is invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The caller supplied a parameter the route does not accept.
    #[error("{message}")]
    InvalidParameter { param: String, message: String },

    /// The caller asked for an option this gateway layer never supports.
    #[error("{message}")]
    UnsupportedOption { option: String, message: String },

    /// The vendor behind the route does not expose the operation.
    #[error("The {route} route is not available for {provider} models.")]
    CapabilityUnsupported { route: String, provider: String },

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The vendor body did not have the expected shape.
    #[error("Failed to parse provider response: {0}")]
    Parse(String),
}

impl GatewayError {
    /// A vendor-native spelling was used where a canonical field exists.
    pub fn invalid_parameter(param: impl Into<String>, use_instead: impl AsRef<str>) -> Self {
        let param = param.into();
        let message = format!(
            "Invalid parameter {param}. Use {} instead.",
            use_instead.as_ref()
        );
        Self::InvalidParameter { param, message }
    }

    /// The route already pins a model, so a per-request override is refused.
    pub fn model_not_permitted() -> Self {
        Self::InvalidParameter {
            param: "model".to_string(),
            message: "The parameter 'model' is not permitted to be passed. The route being \
                      queried already defines a model instance."
                .to_string(),
        }
    }

    /// A vendor-opaque extra reuses the name of a declared request field.
    pub fn shadowed_parameter(param: impl Into<String>) -> Self {
        let param = param.into();
        let message = format!(
            "Parameter {param} was passed both as a request field and as an extra field. \
             Set it once, through the request field."
        );
        Self::InvalidParameter { param, message }
    }

    pub fn streaming_not_supported() -> Self {
        Self::UnsupportedOption {
            option: "stream".to_string(),
            message: "Setting the 'stream' parameter to 'true' is not supported by this gateway. \
                      Remove 'stream' or set it to false."
                .to_string(),
        }
    }

    pub fn capability_unsupported(route: RouteType, provider: impl Into<String>) -> Self {
        Self::CapabilityUnsupported {
            route: route.as_str().to_string(),
            provider: provider.into(),
        }
    }

    /// HTTP-equivalent status for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ConfigMismatch(_) | Self::Configuration(_) => 500,
            Self::InvalidParameter { .. } | Self::UnsupportedOption { .. } => 422,
            Self::CapabilityUnsupported { .. } | Self::RouteNotFound(_) => 404,
            Self::Transport(err) => err.status_code(),
            Self::Parse(_) => 502,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigMismatch(_) | Self::Configuration(_) => ErrorCategory::Configuration,
            Self::InvalidParameter { .. } | Self::UnsupportedOption { .. } => {
                ErrorCategory::Client
            }
            Self::CapabilityUnsupported { .. } | Self::RouteNotFound(_) => {
                ErrorCategory::Unsupported
            }
            Self::Transport(_) | Self::Parse(_) => ErrorCategory::Upstream,
        }
    }

    /// True when the status class is 4xx.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}
