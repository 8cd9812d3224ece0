//! Detail-page parser
//!
//! Each detainee's detail page carries free-form biographical text inside a
//! single `div.nytint-detainee-fullcol` container, including a sentence
//! stating how long the detainee has been held ("... 14 years ..."). This
//! module pulls the integer out of that sentence.

use crate::DetailParseError;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;

/// First "<digits> year" phrase in the biography text
fn duration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+) year").unwrap())
}

/// Extracts the years-detained figure from a detainee detail page
///
/// Locates the biography container, collects its text, and parses the digit
/// run of the first `<digits> year` match. "10 years" matches too; the
/// trailing `s` is irrelevant to the pattern.
///
/// This never falls back to a default value: an absent container or a page
/// with no duration phrase is an error, so a malformed page can be reported
/// against the entry that produced it.
///
/// # Arguments
///
/// * `html` - The detail page markup
///
/// # Returns
///
/// * `Ok(u32)` - The years-detained count
/// * `Err(DetailParseError)` - Container absent, no match, or unparseable digits
pub fn extract_years_detained(html: &str) -> Result<u32, DetailParseError> {
    let document = Html::parse_document(html);

    let selector = Selector::parse("div.nytint-detainee-fullcol")
        .map_err(|_| DetailParseError::MissingBioSection)?;

    let container = document
        .select(&selector)
        .next()
        .ok_or(DetailParseError::MissingBioSection)?;

    let text: String = container.text().collect();

    let captures = duration_pattern()
        .captures(&text)
        .ok_or(DetailParseError::DurationNotFound)?;

    let digits = &captures[1];
    digits
        .parse::<u32>()
        .map_err(|_| DetailParseError::InvalidCount(digits.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_page(bio: &str) -> String {
        format!(
            r#"<html><body>
            <div class="nytint-detainee-fullcol"><p>{}</p></div>
            </body></html>"#,
            bio
        )
    }

    #[test]
    fn test_single_digit_count() {
        let html = detail_page("He has been held for 7 year at the prison.");
        assert_eq!(extract_years_detained(&html).unwrap(), 7);
    }

    #[test]
    fn test_multi_digit_count_with_plural() {
        let html = detail_page("Held without charge for 10 years.");
        assert_eq!(extract_years_detained(&html).unwrap(), 10);
    }

    #[test]
    fn test_first_match_wins() {
        let html = detail_page("Held for 14 years. Transferred after 2 years of review.");
        assert_eq!(extract_years_detained(&html).unwrap(), 14);
    }

    #[test]
    fn test_text_split_across_child_elements() {
        // "12" and " years" live in different text nodes; the container text
        // is collected as a whole before matching.
        let html = r#"<html><body>
            <div class="nytint-detainee-fullcol">
                <p>Captured in 2002.</p>
                <p>He has been held for <strong>12</strong> years since.</p>
            </div>
            </body></html>"#;
        assert_eq!(extract_years_detained(html).unwrap(), 12);
    }

    #[test]
    fn test_missing_container_is_an_error() {
        let html = r#"<html><body><div class="other">held 7 years</div></body></html>"#;
        assert!(matches!(
            extract_years_detained(html),
            Err(DetailParseError::MissingBioSection)
        ));
    }

    #[test]
    fn test_no_duration_phrase_is_an_error() {
        let html = detail_page("No duration is stated here.");
        assert!(matches!(
            extract_years_detained(&html),
            Err(DetailParseError::DurationNotFound)
        ));
    }

    #[test]
    fn test_never_defaults_to_zero() {
        let html = detail_page("Biography with no numbers at all.");
        // The property that matters: a bad page is an error, not years=0.
        assert!(extract_years_detained(&html).is_err());
    }

    #[test]
    fn test_year_without_count_does_not_match() {
        let html = detail_page("Captured early in the year after the invasion.");
        assert!(matches!(
            extract_years_detained(&html),
            Err(DetailParseError::DurationNotFound)
        ));
    }
}
