//! Output module for the aggregated table and run reporting
//!
//! This module handles:
//! - Writing the final CSV artifact
//! - Summarizing run outcomes (entries, records, failures)

mod csv;
mod summary;

pub use self::csv::{write_records, DetaineeRecord};
pub use summary::{print_summary, EntryFailure, RunSummary};
