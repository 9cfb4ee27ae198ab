// src/crawl/mod.rs
// =============================================================================
// The crawl itself, split into three pieces:
// - normalize: turns raw hrefs into absolute, slash-terminated URLs
// - frontier:  the ordered, duplicate-free anchor collection
// - engine:    the breadth-first loop that drives fetching and discovery
// =============================================================================

mod engine;
mod frontier;
mod normalize;

pub use engine::{SeedError, SitemapGenerator};
