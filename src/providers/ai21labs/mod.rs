//! AI21 Labs (Jurassic) adapter.
//!
//! Serves text completions only. Chat and embeddings report
//! `CapabilityUnsupported` without touching the network.

pub mod client;
pub mod transformers;
pub mod types;

pub use client::Ai21LabsProvider;
pub use transformers::{AI21_COMPLETIONS_RENAMES, Ai21RequestTransformer, Ai21ResponseTransformer};

pub const PROVIDER_ID: &str = "ai21labs";
pub const DISPLAY_NAME: &str = "AI21Labs";
pub const DEFAULT_BASE_URL: &str = "https://api.ai21.com/studio/v1";
pub const COMPLETIONS_PATH: &str = "complete";
