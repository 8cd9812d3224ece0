//! Detainee-Docket: a Guantánamo detainee docket scraper
//!
//! This crate scrapes the public listing of current Guantánamo detainees,
//! follows each detainee's detail page, extracts the detention duration in
//! years from the biographical text, and writes the aggregated rows to CSV.

pub mod config;
pub mod output;
pub mod scrape;

use thiserror::Error;

/// Main error type for Detainee-Docket operations
#[derive(Debug, Error)]
pub enum DocketError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Detail page error for {url}: {source}")]
    Detail {
        url: String,
        source: DetailParseError,
    },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors from extracting the detention duration out of a detail page
#[derive(Debug, Error)]
pub enum DetailParseError {
    #[error("Detail page has no biography section (div.nytint-detainee-fullcol)")]
    MissingBioSection,

    #[error("No '<digits> year' phrase found in biography text")]
    DurationNotFound,

    #[error("Failed to parse year count: {0}")]
    InvalidCount(String),
}

/// Result type alias for Detainee-Docket operations
pub type Result<T> = std::result::Result<T, DocketError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use output::{DetaineeRecord, RunSummary};
pub use scrape::{Aggregator, ListingEntry};
