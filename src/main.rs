//! Washi main entry point
//!
//! Command-line interface for the Washi page harvester.

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use washi::config::{load_config_with_hash, Config};
use washi::crawler::{build_http_client, crawl_and_save, discover_urls};
use washi::output::FileOutput;

/// Washi: a sitemap-driven page harvester
///
/// Washi discovers a website's pages through its sitemaps (including
/// robots.txt hints and sitemap indexes), crawls them sequentially with a
/// politeness delay, and saves each page as clean markdown text.
#[derive(Parser, Debug)]
#[command(name = "washi")]
#[command(version = "1.0.0")]
#[command(about = "A sitemap-driven page harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the discovered URL set and exit without crawling
    #[arg(long, conflicts_with = "dry_run")]
    discover: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long, conflicts_with = "discover")]
    dry_run: bool,

    /// Skip the confirmation prompt shown for large URL sets
    #[arg(short = 'y', long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    if cli.discover {
        return handle_discover(&config).await;
    }

    handle_crawl(&config, cli.yes).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("washi=info,warn"),
            1 => EnvFilter::new("washi=debug,info"),
            2 => EnvFilter::new("washi=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Washi Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    if let Some(sitemap_url) = &config.site.sitemap_url {
        println!("  Custom sitemap: {}", sitemap_url);
        println!(
            "  Custom sitemap only: {}",
            config.site.use_custom_sitemap_only
        );
    }
    if let Some(filter) = &config.site.url_filter {
        println!("  URL filter: {}", filter);
    }

    println!("\nCrawler:");
    println!("  User agent: {}", config.crawler.user_agent);
    println!("  Request timeout: {}s", config.crawler.request_timeout);
    println!("  Verify TLS: {}", config.crawler.verify_tls);
    println!("  Max retries: {}", config.crawler.max_retries);
    println!(
        "  Delay between requests: {}s",
        config.crawler.delay_between_requests
    );

    println!("\nOutput:");
    println!(
        "  Directory: {}/{}",
        config.output.directory, config.output.file_prefix
    );
    match config.output.max_pages {
        Some(max) => println!("  Max pages to save: {}", max),
        None => println!("  Max pages to save: unlimited"),
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the --discover mode: resolves the sitemap URL set and prints it
async fn handle_discover(config: &Config) -> anyhow::Result<()> {
    let client = build_http_client(&config.crawler)?;
    let urls = discover_urls(&client, config).await?;

    if urls.is_empty() {
        println!("No URLs found to crawl");
        return Ok(());
    }

    for url in &urls {
        println!("{}", url);
    }
    println!("\nTotal unique URLs: {}", urls.len());

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, yes: bool) -> anyhow::Result<()> {
    let client = build_http_client(&config.crawler)?;

    let urls = discover_urls(&client, config).await?;
    if urls.is_empty() {
        println!("No URLs found to crawl");
        return Ok(());
    }

    println!("Total unique URLs to crawl: {}", urls.len());

    if urls.len() > 100 && !yes && !confirm_large_crawl(urls.len())? {
        println!("Operation cancelled by user");
        return Ok(());
    }

    let mut sink = FileOutput::new(
        Path::new(&config.output.directory),
        &config.output.file_prefix,
    )
    .context("Output directory is not writable")?;

    // Ctrl-C stops the crawl between pages; already-saved pages stay valid
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupt received, stopping after the current page");
                cancel.cancel();
            }
        });
    }

    let report = crawl_and_save(&client, urls, config, &mut sink, cancel).await?;

    println!(
        "\nCrawl finished: {} attempted, {} saved, {} failed (output: {})",
        report.attempted,
        report.saved,
        report.failed,
        sink.directory().display()
    );

    if report.cancelled {
        anyhow::bail!("Operation cancelled by user");
    }

    Ok(())
}

/// Asks for confirmation before crawling an unexpectedly large URL set
fn confirm_large_crawl(count: usize) -> anyhow::Result<bool> {
    print!(
        "\nWarning: You are about to crawl {} URLs. Do you want to continue? (y/n): ",
        count
    );
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
