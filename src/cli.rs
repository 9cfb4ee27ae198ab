// src/cli.rs

use clap::Parser;

/// Command-line arguments for the sitemap generator.
#[derive(Parser, Debug)]
#[command(
    name = "sitemapper",
    version = "0.1.0",
    about = "Crawls a single domain and prints an XML sitemap of every page it reaches"
)]
pub struct Cli {
    /// Domain to generate a sitemap for (e.g. example.com or localhost:8090)
    pub domain: String,

    /// Scheme to reach the domain with (http or https)
    #[arg(long, default_value = "https")]
    pub scheme: String,

    /// How many link levels to follow from the seed page (0 crawls only the seed)
    #[arg(long, default_value_t = 5)]
    pub max_depth: usize,

    /// How many page fetches of one level may run at the same time
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,

    /// Seconds before an individual page fetch is abandoned
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}
