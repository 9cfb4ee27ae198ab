// src/main.rs
// =============================================================================
// Binary entry point: parse arguments, run one crawl, print the sitemap.
// The only errors that reach the user here are the ones that stop a crawl
// from starting at all; broken pages mid-crawl are logged and skipped.
// =============================================================================

mod cli;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use sitemapper::{HttpFetcher, SitemapGenerator};

use cli::Cli;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let seed = format!("{}://{}", cli.scheme, cli.domain);

    let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout))
        .context("could not set up the HTTP client")?;

    let generator = SitemapGenerator::new(&seed, cli.max_depth, fetcher)
        .with_context(|| format!("cannot crawl '{}'", seed))?
        .with_fetch_concurrency(cli.concurrency);

    println!("Going to generate sitemap for [{}]...", generator.domain_prefix());

    let started = Instant::now();
    let sitemap = generator.generate().await;

    println!(
        "Sitemap generated for [{}] in {:.2} seconds:\n",
        generator.domain_prefix(),
        started.elapsed().as_secs_f64()
    );
    println!("{}", sitemap);

    Ok(())
}
