//! Adapter contract shared by every vendor.

pub mod adapter;
pub mod capabilities;

pub use adapter::ProviderAdapter;
pub use capabilities::ProviderCapabilities;
