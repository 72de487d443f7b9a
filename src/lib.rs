//! # warera-client
//!
//! Caching, batching client for the WarEra game's tRPC HTTP API.
//!
//! ## Overview
//!
//! Every call is a GET against `<base>/<procedure>?input=<json>`. Replies are
//! cached per endpoint and input with a per-endpoint lifetime, so repeated
//! lookups are served locally. Uncached calls are throttled, and lookups can
//! be queued and sent as combined `?batch=1` requests whose individual
//! replies are written back into the cache.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use warera_client::{ClientConfig, WarEraClient};
//!
//! fn main() -> warera_client::Result<()> {
//!     let mut client = WarEraClient::builder()
//!         .config(ClientConfig::from_env())
//!         .build()?;
//!
//!     let user = client.get_user_lite("686171897e2427d535e30814")?;
//!     println!("{} is level {}", user.username, user.level());
//!
//!     // Queue lookups and send them in one request.
//!     client.queue_company("company-1");
//!     client.queue_company("company-2");
//!     let replies = client.flush_batch()?;
//!     assert_eq!(replies.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Typed client, endpoint catalogue and builder |
//! | [`sender`] | Cache-backed, throttled request sender |
//! | [`batch`] | Batch queue and flush |
//! | [`cache`] | Cache keys and stores (memory, file) |
//! | [`transport`] | HTTP transport |
//! | [`types`] | Records and query parameters |
//! | [`config`] | Client configuration |
//! | [`clock`] | Time source used for expiry and throttling |

pub mod batch;
pub mod cache;
pub mod client;
pub mod clock;
pub mod config;
pub mod sender;
pub mod transport;
pub mod types;

pub use client::{WarEraClient, WarEraClientBuilder};
pub use config::ClientConfig;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
