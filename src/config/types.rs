use serde::Deserialize;

/// Main configuration structure for Detainee-Docket
///
/// Every field has a default equal to the literal the scraper was written
/// against, so a config file is optional: `Config::default()` reproduces the
/// zero-configuration behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scrape: ScrapeConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scrape: ScrapeConfig::default(),
            user_agent: UserAgentConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Scrape behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Base URL of the site hosting the docket
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Absolute path of the listing page under the base URL
    #[serde(rename = "listing-path")]
    pub listing_path: String,

    /// Courtesy delay between detail-page requests (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.nytimes.com".to_string(),
            listing_path: "/interactive/projects/guantanamo/detainees/current".to_string(),
            request_delay_ms: 2000,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the scraper
    #[serde(rename = "scraper-name")]
    pub scraper_name: String,

    /// Version of the scraper
    #[serde(rename = "scraper-version")]
    pub scraper_version: String,

    /// URL with information about the scraper
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for scraper-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            scraper_name: "DetaineeDocket".to_string(),
            scraper_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/detainee-docket/detainee-docket".to_string(),
            contact_email: "contact@detainee-docket.invalid".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the CSV file to write (overwritten if it exists)
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "guantanamo.csv".to_string(),
        }
    }
}
