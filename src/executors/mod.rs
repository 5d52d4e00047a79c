//! Executors Layer
//!
//! HTTP orchestration that wires a vendor's transformers to its endpoint:
//! transform the request, send it through the transport, reshape the reply.

pub mod completions;

pub use completions::{CompletionsExecutor, HttpCompletionsExecutor};
