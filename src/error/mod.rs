//! Error Handling Module
//!
//! This module provides the error taxonomy shared by every adapter:
//! - Core error types (`GatewayError`, `TransportError`, `ErrorCategory`)
//! - Client-facing error bodies for the dispatch layer
//! - Type conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use llmgate::error::{ErrorCategory, GatewayError};
//!
//! let error = GatewayError::invalid_parameter("maxTokens", "max_tokens");
//! assert_eq!(error.status_code(), 422);
//! assert_eq!(error.category(), ErrorCategory::Client);
//! ```

mod conversions;
pub mod helpers;
pub mod types;

pub use helpers::*;
pub use types::*;
