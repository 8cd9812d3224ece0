//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper, including:
//! - Building an HTTP client with a proper user agent string
//! - GET requests to fetch page content
//! - Status-code and network error classification

use crate::config::UserAgentConfig;
use crate::DocketError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use detainee_docket::config::UserAgentConfig;
/// use detainee_docket::scrape::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    // Format: ScraperName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.scraper_name, config.scraper_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body
///
/// A non-2xx status is an error here rather than a body to parse: the
/// original script passed error pages straight into the HTML parser, which
/// then failed with an unrelated message. Surfacing the status keeps the
/// failure attributable to the request that caused it.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body text
/// * `Err(DocketError)` - Network failure or non-2xx status
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, DocketError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| DocketError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DocketError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| DocketError::Http {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&UserAgentConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_format() {
        let config = UserAgentConfig {
            scraper_name: "TestScraper".to_string(),
            scraper_version: "1.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        };
        let user_agent = format!(
            "{}/{} (+{}; {})",
            config.scraper_name, config.scraper_version, config.contact_url, config.contact_email
        );
        assert_eq!(
            user_agent,
            "TestScraper/1.0 (+https://example.com/about; admin@example.com)"
        );
    }

    // Fetch behavior against live responses is covered by the wiremock
    // integration tests.
}
