//! Breadth-first, single-domain web crawler that renders every page it
//! reaches as a sitemaps.org XML document.
//!
//! The crawl starts at the root of a domain and follows same-domain links
//! level by level until the frontier runs dry or a depth limit is hit.
//! Every URL that gets attempted ends up in the sitemap, in discovery
//! order; pages that fail to download or parse keep their slot, their
//! links are simply never followed.
//!
//! ```ignore
//! use std::time::Duration;
//!
//! use sitemapper::{HttpFetcher, SitemapGenerator};
//!
//! let fetcher = HttpFetcher::new(Duration::from_secs(10))?;
//! let generator = SitemapGenerator::new("https://example.com", 3, fetcher)?;
//! println!("{}", generator.generate().await);
//! ```

pub mod anchor;
pub mod crawl;
pub mod fetch;
pub mod sitemap;

pub use anchor::{Anchor, ParseError};
pub use crawl::{SeedError, SitemapGenerator};
pub use fetch::{FetchError, HttpFetcher, PageFetcher};
