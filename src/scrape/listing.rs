//! Listing-page parser
//!
//! The listing page enumerates every current detainee as an anchor whose
//! href points into the detainee namespace (`detainees/<digits>`). The
//! anchor's text is the detainee's name; the *next* anchor in document order
//! carries the country of citizenship.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// Anchors pointing at individual detainee pages, e.g. `/detainees/290-...`
fn detainee_link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"detainees/\d").unwrap())
}

/// A single entry discovered on the listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Detainee display name (the anchor's text)
    pub name: String,

    /// Country of citizenship (text of the following anchor)
    pub country: String,

    /// Link target of the detainee's detail page (as written in the markup)
    pub href: String,
}

/// Parses the listing page and returns detainee entries in document order
///
/// The country linkage is positional: each detainee anchor takes the text of
/// the next anchor element in the document, whatever that anchor is. This
/// matches the source page's actual layout but is a known limitation; a
/// structural change to the page extracts wrong text rather than failing.
/// A detainee anchor with no following anchor at all is skipped with a
/// warning. Zero matching anchors yield an empty Vec, not an error.
///
/// # Arguments
///
/// * `html` - The listing page markup
///
/// # Returns
///
/// Entries in the order they appear on the page
pub fn parse_listing(html: &str) -> Vec<ListingEntry> {
    let document = Html::parse_document(html);
    let mut entries = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        let anchors: Vec<ElementRef> = document.select(&a_selector).collect();

        for (i, anchor) in anchors.iter().enumerate() {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };

            if !detainee_link_pattern().is_match(href) {
                continue;
            }

            let name = anchor_text(anchor);

            let Some(next) = anchors.get(i + 1) else {
                tracing::warn!("No anchor follows detainee link for '{}', skipping", name);
                continue;
            };

            entries.push(ListingEntry {
                name,
                country: anchor_text(next),
                href: href.to_string(),
            });
        }
    }

    entries
}

/// Collects and trims the text content of an anchor
fn anchor_text(anchor: &ElementRef) -> String {
    anchor.text().collect::<String>().trim().to_string()
}
