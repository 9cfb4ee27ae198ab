// src/fetch/mod.rs
// =============================================================================
// Page fetching. The crawler only ever talks to the `PageFetcher` trait;
// the reqwest-backed implementation lives in `http.rs`, tests script their
// own.
// =============================================================================

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

mod http;

pub use http::HttpFetcher;

/// Downloads one page body. Implementations decide what a "page" is;
/// the crawler only cares about bytes or a reason there are none.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;
}

/// Ways a page can fail to arrive. The crawler handles all of them the
/// same way (the page stays in the sitemap, its links are lost); the
/// variants exist so the log line can say what actually happened.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client itself could not be built
    #[error("could not build HTTP client: {0}")]
    Client(String),

    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("request failed: {0}")]
    Transport(String),

    /// A response arrived, but with a non-success status
    #[error("server answered with status {0}")]
    Status(u16),
}
