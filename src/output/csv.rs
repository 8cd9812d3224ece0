//! CSV writer for the aggregated detainee table

use crate::Result;
use serde::Serialize;
use std::path::Path;

/// One row of the output table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetaineeRecord {
    /// Detainee display name
    pub name: String,

    /// Country of citizenship
    pub country: String,

    /// Years detained
    pub years: u32,
}

/// Writes the records to a CSV file at the given path
///
/// The file always starts with the header row `name,country,years`, followed
/// by one row per record in the given order; there is no index column. Zero
/// records produce a header-only file. Any existing file at the path is
/// truncated and overwritten.
///
/// # Arguments
///
/// * `path` - Destination file path
/// * `records` - Rows to write, in output order
pub fn write_records(path: &Path, records: &[DetaineeRecord]) -> Result<()> {
    // Header is written explicitly so that an empty run still produces it
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(["name", "country", "years"])?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_records() -> Vec<DetaineeRecord> {
        vec![
            DetaineeRecord {
                name: "Abdul Latif Nasser".to_string(),
                country: "Morocco".to_string(),
                years: 14,
            },
            DetaineeRecord {
                name: "Saeed Bakhouch".to_string(),
                country: "Algeria".to_string(),
                years: 7,
            },
        ]
    }

    #[test]
    fn test_header_and_rows_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_records(&path, &sample_records()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "name,country,years\nAbdul Latif Nasser,Morocco,14\nSaeed Bakhouch,Algeria,7\n"
        );
    }

    #[test]
    fn test_empty_records_write_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_records(&path, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "name,country,years\n");
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        std::fs::write(&path, "stale content that should disappear").unwrap();
        write_records(&path, &sample_records()[..1]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "name,country,years\nAbdul Latif Nasser,Morocco,14\n");
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.csv");
        let second = dir.path().join("b.csv");

        let records = sample_records();
        write_records(&first, &records).unwrap();
        write_records(&second, &records).unwrap();

        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn test_name_with_comma_is_quoted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quoted.csv");

        let records = vec![DetaineeRecord {
            name: "Nasser, Abdul Latif".to_string(),
            country: "Morocco".to_string(),
            years: 14,
        }];
        write_records(&path, &records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "name,country,years\n\"Nasser, Abdul Latif\",Morocco,14\n"
        );
    }
}
