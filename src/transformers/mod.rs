//! Transformers layer
//!
//! Request transformers turn canonical requests into vendor payloads, response
//! transformers turn vendor JSON back into canonical responses. The checks and
//! the rename table every adapter shares live here too, so each vendor only
//! declares its table and its response shape.

pub mod rename;
pub mod request;
pub mod response;
pub mod validation;

pub use rename::KeyRenameTable;
pub use request::RequestTransformer;
pub use response::ResponseTransformer;
