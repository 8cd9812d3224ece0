//! Run summary reporting
//!
//! This module provides the per-run outcome summary printed after a scrape:
//! how many entries the listing yielded, how many became CSV rows, and which
//! entries failed and why.

/// A listing entry that could not be turned into a record
#[derive(Debug, Clone)]
pub struct EntryFailure {
    /// Detainee display name from the listing
    pub name: String,

    /// Link target of the detail page that failed
    pub href: String,

    /// Human-readable failure reason
    pub reason: String,
}

/// Outcome summary of a scrape run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of entries discovered on the listing page
    pub entries_discovered: usize,

    /// Number of records written to the CSV
    pub records_written: usize,

    /// Entries that failed, in listing order
    pub failures: Vec<EntryFailure>,
}

impl RunSummary {
    /// True when at least one entry was discovered and every one failed
    pub fn all_failed(&self) -> bool {
        self.entries_discovered > 0 && self.records_written == 0
    }
}

/// Prints the run summary to stdout in a formatted manner
///
/// # Arguments
///
/// * `summary` - The summary to display
pub fn print_summary(summary: &RunSummary) {
    println!("=== Scrape Summary ===\n");

    println!("Overview:");
    println!("  Entries discovered: {}", summary.entries_discovered);
    println!("  Records written:    {}", summary.records_written);
    println!("  Failures:           {}", summary.failures.len());
    println!();

    if !summary.failures.is_empty() {
        println!("Failed Entries:");
        for failure in &summary.failures {
            println!("  - {} ({}): {}", failure.name, failure.href, failure.reason);
        }
        println!();
    }

    let success_rate = if summary.entries_discovered > 0 {
        (summary.records_written as f64 / summary.entries_discovered as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Success Rate: {:.1}% ({} / {} entries processed)",
        success_rate, summary.records_written, summary.entries_discovered
    );
}
