//! Configuration module for Detainee-Docket
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use detainee_docket::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping from: {}{}", config.scrape.base_url, config.scrape.listing_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, ScrapeConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{default_config, load_config};

// Re-export validation
pub use validation::validate;
