// src/crawl/engine.rs
// =============================================================================
// Breadth-first sitemap crawl over a single domain.
//
// The crawl advances one depth level at a time:
// 1. Fetch every page in the current frontier, a bounded number in flight
//    at once, consuming results in frontier order
// 2. Record each page as visited, whether or not the fetch worked
// 3. Canonicalize the links of pages that did work and collect the unseen
//    same-domain ones into the next frontier
// 4. Stop when the next frontier is empty or the depth limit is reached
//
// A URL lands in the visited list the moment its fetch is accounted for,
// so no URL is ever attempted twice and a crawl over a finite site always
// terminates, broken pages included.
// =============================================================================

use futures::stream::{self, StreamExt};
use log::{debug, warn};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::anchor::{extract_anchors, Anchor};
use crate::crawl::frontier::AnchorSet;
use crate::crawl::normalize::canonicalize;
use crate::fetch::PageFetcher;
use crate::sitemap;

const DEFAULT_FETCH_CONCURRENCY: usize = 8;

/// The one error a crawl can die of: a seed URL that gives the crawler no
/// domain to stay inside. Everything after the seed degrades per page
/// instead of failing.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed URL did not parse
    #[error("invalid seed URL '{url}': {source}")]
    Invalid {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Seed URL parsed but names no host
    #[error("seed URL '{url}' has no host")]
    MissingHost { url: String },
}

/// Crawls one domain breadth-first and renders what it finds as sitemap
/// XML. The fetcher is injected so tests can script page bodies; state
/// lives on the stack of each `crawl` call, so one generator can run any
/// number of crawls.
#[derive(Debug)]
pub struct SitemapGenerator<F> {
    scheme: String,
    host: String,
    max_depth: usize,
    fetch_concurrency: usize,
    fetcher: F,
}

impl<F: PageFetcher> SitemapGenerator<F> {
    /// Builds a generator rooted at `seed_url`. The seed's scheme and
    /// authority become the domain boundary; a seed without a host is
    /// refused here, before anything is fetched.
    pub fn new(seed_url: &str, max_depth: usize, fetcher: F) -> Result<Self, SeedError> {
        let parsed = Url::parse(seed_url).map_err(|source| SeedError::Invalid {
            url: seed_url.to_string(),
            source,
        })?;

        let host = match parsed.host_str() {
            Some(host) => host,
            None => {
                return Err(SeedError::MissingHost {
                    url: seed_url.to_string(),
                })
            }
        };

        // Url::host_str() drops an explicit port; the domain boundary
        // keeps it, so localhost:8090 and localhost:8091 stay distinct.
        let host = match parsed.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host,
            max_depth,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
            fetcher,
        })
    }

    /// Caps how many fetches of one level run at the same time. Clamped
    /// to at least one.
    pub fn with_fetch_concurrency(mut self, concurrency: usize) -> Self {
        self.fetch_concurrency = concurrency.max(1);
        self
    }

    /// The `scheme://host` prefix every crawled URL starts with.
    pub fn domain_prefix(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    /// Runs the crawl to completion and returns every visited URL in
    /// discovery order, the seed first.
    pub async fn crawl(&self) -> Vec<Anchor> {
        self.run_crawl(&CancellationToken::new()).await.into_anchors()
    }

    /// Like [`crawl`](Self::crawl), but stops early once `cancel` fires
    /// and returns whatever was visited up to that point. In-flight
    /// fetches are dropped, not awaited.
    pub async fn crawl_with_cancellation(&self, cancel: CancellationToken) -> Vec<Anchor> {
        self.run_crawl(&cancel).await.into_anchors()
    }

    /// Crawls and renders the result as sitemap XML.
    pub async fn generate(&self) -> String {
        sitemap::render(&self.crawl().await)
    }

    /// Cancellable [`generate`](Self::generate); a cancelled crawl still
    /// renders a well-formed document of the pages visited so far.
    pub async fn generate_with_cancellation(&self, cancel: CancellationToken) -> String {
        sitemap::render(&self.crawl_with_cancellation(cancel).await)
    }

    async fn run_crawl(&self, cancel: &CancellationToken) -> AnchorSet {
        let domain = self.domain_prefix();

        let mut visited = AnchorSet::new();
        let mut frontier = AnchorSet::new();
        frontier.push(canonicalize(&Anchor::new("/", ""), &self.scheme, &self.host));

        let mut depth: usize = 0;

        loop {
            debug!("level {}: fetching {} page(s)", depth, frontier.len());

            let mut next = AnchorSet::new();

            // Scoped so the stream's borrow of the frontier ends before
            // the frontier is replaced below.
            {
                let fetcher = &self.fetcher;
                let mut fetches = stream::iter(frontier.iter().cloned().map(|anchor| async move {
                    let body = fetcher.fetch(&anchor.href).await;
                    (anchor, body)
                }))
                .buffered(self.fetch_concurrency);

                loop {
                    let (anchor, body) = tokio::select! {
                        biased;
                        _ = cancel.cancelled() => {
                            debug!("crawl cancelled after {} page(s)", visited.len());
                            return visited;
                        }
                        item = fetches.next() => match item {
                            Some(pair) => pair,
                            None => break,
                        },
                    };

                    // Attempted means visited, even when the page is broken.
                    visited.push(anchor.clone());

                    let body = match body {
                        Ok(body) => body,
                        Err(e) => {
                            warn!("could not visit [{}]: {}", anchor.href, e);
                            continue;
                        }
                    };

                    let found = match extract_anchors(&body) {
                        Ok(found) => found,
                        Err(e) => {
                            warn!("could not parse anchors from [{}]: {}", anchor.href, e);
                            continue;
                        }
                    };

                    for raw in &found {
                        let candidate = canonicalize(raw, &self.scheme, &self.host);
                        if frontier.contains(&candidate) || visited.contains(&candidate) {
                            continue;
                        }
                        next.admit(candidate, &domain);
                    }
                }
            }

            if next.is_empty() || depth + 1 > self.max_depth {
                return visited;
            }

            frontier = next;
            depth += 1;
        }
    }
}
