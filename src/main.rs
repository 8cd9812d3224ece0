//! Detainee-Docket main entry point
//!
//! This is the command-line interface for the Guantánamo detainee docket
//! scraper.

use anyhow::Context;
use clap::Parser;
use detainee_docket::config::{default_config, load_config, Config};
use detainee_docket::output::print_summary;
use detainee_docket::scrape::scrape;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Detainee-Docket: a Guantánamo detainee docket scraper
///
/// Fetches the public listing of current detainees, follows each detainee's
/// detail page to extract the years-detained figure, and writes the
/// aggregated name/country/years table to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "detainee-docket")]
#[command(version)]
#[command(about = "Scrape the Guantánamo detainee docket to CSV", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (omit to use built-in defaults)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without any network traffic
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("failed to load {}", path.display()))?
        }
        None => {
            tracing::info!("No config file given, using built-in defaults");
            default_config().context("built-in default configuration is invalid")?
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("detainee_docket=info,warn"),
            1 => EnvFilter::new("detainee_docket=debug,info"),
            2 => EnvFilter::new("detainee_docket=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would be scraped
fn handle_dry_run(config: &Config) {
    println!("=== Detainee-Docket Dry Run ===\n");

    println!("Scrape Configuration:");
    println!("  Base URL: {}", config.scrape.base_url);
    println!("  Listing path: {}", config.scrape.listing_path);
    println!("  Request delay: {}ms", config.scrape.request_delay_ms);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.scraper_name);
    println!("  Version: {}", config.user_agent.scraper_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  CSV file: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would fetch listing from {}{}",
        config.scrape.base_url, config.scrape.listing_path
    );
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting scrape: {}{} -> {}",
        config.scrape.base_url,
        config.scrape.listing_path,
        config.output.csv_path
    );

    let summary = match scrape(config).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            return Err(e.into());
        }
    };

    print_summary(&summary);

    // Partial success is still success; a run where every entry failed is not
    if summary.all_failed() {
        anyhow::bail!(
            "all {} discovered entries failed, no records written",
            summary.entries_discovered
        );
    }

    Ok(())
}
