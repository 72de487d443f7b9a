//! Integration tests with mock HTTP server

pub mod batching;
pub mod caching;
pub mod errors;
pub mod mock_server;
pub mod paging;
