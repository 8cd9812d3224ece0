use crate::config::types::{Config, OutputConfig, ScrapeConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scrape_config(&config.scrape)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates scrape configuration
fn validate_scrape_config(config: &ScrapeConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|_| ConfigError::InvalidUrl(config.base_url.clone()))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must be http or https, got '{}'",
            base.scheme()
        )));
    }

    if !config.listing_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "listing-path must be absolute (start with '/'), got '{}'",
            config.listing_path
        )));
    }

    // Joining must produce a usable listing URL
    base.join(&config.listing_path)
        .map_err(|_| ConfigError::InvalidUrl(config.listing_path.clone()))?;

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate scraper name: non-empty, alphanumeric + hyphens only
    if config.scraper_name.is_empty() {
        return Err(ConfigError::Validation(
            "scraper-name cannot be empty".to_string(),
        ));
    }

    if !config
        .scraper_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "scraper-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.scraper_name
        )));
    }

    if config.scraper_version.is_empty() {
        return Err(ConfigError::Validation(
            "scraper-version cannot be empty".to_string(),
        ));
    }

    Url::parse(&config.contact_url)
        .map_err(|_| ConfigError::InvalidUrl(config.contact_url.clone()))?;

    if !config.contact_email.contains('@') {
        return Err(ConfigError::Validation(format!(
            "contact-email does not look like an email address: '{}'",
            config.contact_email
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_bad_base_url() {
        let mut config = Config::default();
        config.scrape.base_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_non_http_base_url() {
        let mut config = Config::default();
        config.scrape.base_url = "ftp://example.com".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_relative_listing_path() {
        let mut config = Config::default();
        config.scrape.listing_path = "detainees/current".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_scraper_name() {
        let mut config = Config::default();
        config.user_agent.scraper_name = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_scraper_name_with_spaces() {
        let mut config = Config::default();
        config.user_agent.scraper_name = "Bad Name".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_csv_path() {
        let mut config = Config::default();
        config.output.csv_path = String::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_bad_contact_email() {
        let mut config = Config::default();
        config.user_agent.contact_email = "no-at-sign".to_string();
        assert!(validate(&config).is_err());
    }
}
