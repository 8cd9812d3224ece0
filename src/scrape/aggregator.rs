//! Scrape aggregator - main orchestration logic
//!
//! This module contains the sequential run loop that ties everything
//! together: fetch the listing once, then visit each detainee's detail page
//! in listing order with a courtesy delay between requests, collect the
//! records, and write the CSV.

use crate::config::Config;
use crate::output::{write_records, DetaineeRecord, EntryFailure, RunSummary};
use crate::scrape::detail::extract_years_detained;
use crate::scrape::fetcher::{build_http_client, fetch_page};
use crate::scrape::listing::{parse_listing, ListingEntry};
use crate::{DocketError, Result};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Main aggregator structure
pub struct Aggregator {
    config: Config,
    client: Client,
    base_url: Url,
}

impl Aggregator {
    /// Creates a new aggregator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The scraper configuration (already validated)
    ///
    /// # Returns
    ///
    /// * `Ok(Aggregator)` - Successfully created aggregator
    /// * `Err(DocketError)` - Failed to build the HTTP client or parse the base URL
    pub fn new(config: Config) -> Result<Self> {
        let base_url = Url::parse(&config.scrape.base_url)?;

        let client = build_http_client(&config.user_agent).map_err(|source| DocketError::Http {
            url: config.scrape.base_url.clone(),
            source,
        })?;

        Ok(Self {
            config,
            client,
            base_url,
        })
    }

    /// Runs the full scrape and writes the CSV
    ///
    /// 1. Fetch and parse the listing page
    /// 2. For each entry, in listing order: fetch the detail page, extract
    ///    the years-detained figure, record the outcome, sleep the courtesy
    ///    delay before the next request
    /// 3. Write all successful records to the CSV (header only if none)
    ///
    /// A failed entry is recorded in the summary and the run continues; only
    /// a listing-level failure aborts the whole run. The CSV at the
    /// configured path is overwritten without confirmation.
    pub async fn run(&self) -> Result<RunSummary> {
        let listing_url = self.base_url.join(&self.config.scrape.listing_path)?;
        tracing::info!("Fetching listing page: {}", listing_url);

        let listing_html = fetch_page(&self.client, listing_url.as_str()).await?;
        let entries = parse_listing(&listing_html);
        tracing::info!("Discovered {} detainee entries", entries.len());

        let mut records = Vec::new();
        let mut failures = Vec::new();
        let delay = Duration::from_millis(self.config.scrape.request_delay_ms);

        for (i, entry) in entries.iter().enumerate() {
            // Progress feedback, one line per detainee
            tracing::info!("{}", entry.name);

            match self.process_entry(entry).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Failed to process '{}': {}", entry.name, e);
                    failures.push(EntryFailure {
                        name: entry.name.clone(),
                        href: entry.href.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            // Courtesy delay between requests, skipped after the last entry
            if i + 1 < entries.len() {
                tokio::time::sleep(delay).await;
            }
        }

        write_records(Path::new(&self.config.output.csv_path), &records)?;
        tracing::info!(
            "Wrote {} records to {}",
            records.len(),
            self.config.output.csv_path
        );

        Ok(RunSummary {
            entries_discovered: entries.len(),
            records_written: records.len(),
            failures,
        })
    }

    /// Processes a single listing entry into a record
    ///
    /// Fetches the entry's detail page and extracts the years-detained
    /// figure. Any failure (network, status, parse) is returned so the
    /// caller can record it against this entry and move on.
    async fn process_entry(&self, entry: &ListingEntry) -> Result<DetaineeRecord> {
        let detail_url = self.base_url.join(&entry.href)?;
        let detail_html = fetch_page(&self.client, detail_url.as_str()).await?;

        let years = extract_years_detained(&detail_html).map_err(|source| DocketError::Detail {
            url: detail_url.to_string(),
            source,
        })?;

        Ok(DetaineeRecord {
            name: entry.name.clone(),
            country: entry.country.clone(),
            years,
        })
    }
}

/// Runs the main scrape operation
///
/// Convenience entry point: builds an [`Aggregator`] from the config and
/// runs it to completion.
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(RunSummary)` - Scrape completed; summary of outcomes
/// * `Err(DocketError)` - Listing fetch/parse failed or output could not be written
pub async fn run_scrape(config: Config) -> Result<RunSummary> {
    let aggregator = Aggregator::new(config)?;
    aggregator.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregator_creation() {
        let aggregator = Aggregator::new(Config::default());
        assert!(aggregator.is_ok());
    }

    #[test]
    fn test_aggregator_rejects_bad_base_url() {
        let mut config = Config::default();
        config.scrape.base_url = "not a url".to_string();
        assert!(Aggregator::new(config).is_err());
    }

    // Full run behavior is covered by the wiremock integration tests.
}
