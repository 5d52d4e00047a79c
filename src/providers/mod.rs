//! Vendor adapters.
//!
//! Each vendor lives in its own module with a client implementing
//! [`crate::traits::ProviderAdapter`] and the transformers it needs.

pub mod ai21labs;

pub use ai21labs::Ai21LabsProvider;
