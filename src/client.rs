//! Typed client for the WarEra API.
//!
//! Implementation is split into submodules under `src/client/`:
//! the endpoint catalogue, per-endpoint accessors and higher-level
//! lookups built on top of them.

mod accessors;
pub mod builder;
pub mod core;
mod directory;
pub mod endpoint;

pub use builder::WarEraClientBuilder;
pub use self::core::{unwrap_envelope, WarEraClient};
pub use endpoint::Endpoint;
