//! Scrape module for page fetching and extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with a courteous user agent
//! - Listing-page parsing (detainee links and countries)
//! - Detail-page parsing (years-detained extraction)
//! - Sequential run orchestration with a fixed inter-request delay

mod aggregator;
mod detail;
mod fetcher;
mod listing;

pub use aggregator::{run_scrape, Aggregator};
pub use detail::extract_years_detained;
pub use fetcher::{build_http_client, fetch_page};
pub use listing::{parse_listing, ListingEntry};

use crate::config::Config;
use crate::output::RunSummary;
use crate::Result;

/// Runs a complete scrape operation
///
/// This is the main entry point for a scrape. It will:
/// 1. Build the HTTP client
/// 2. Fetch and parse the listing page
/// 3. Visit each detail page in order, with the configured delay
/// 4. Write the CSV and return a summary of outcomes
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(RunSummary)` - Scrape completed
/// * `Err(DocketError)` - Scrape failed before any per-entry work could finish
pub async fn scrape(config: Config) -> Result<RunSummary> {
    run_scrape(config).await
}
