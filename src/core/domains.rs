// src/core/domains.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

use crate::core::models::{HeaderScanError, Result};

/// Splits a line of manual input into domains.
pub fn parse_manual_input(input: &str) -> Vec<String> {
    input.split_whitespace().map(String::from).collect()
}

/// Reads one domain per line, trimmed, skipping blank lines.
/// Order and duplicates are preserved.
pub fn read_domains_from_file(path: &Path) -> Result<Vec<String>> {
    let read_error = |source: std::io::Error| HeaderScanError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut domains = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(read_error)?;
        let domain = line.trim();
        if !domain.is_empty() {
            domains.push(domain.to_string());
        }
    }

    info!(path = %path.display(), count = domains.len(), "Read domains from file.");
    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn manual_input_splits_on_any_whitespace() {
        assert_eq!(
            parse_manual_input("  example.com\tapi.example.com   www.example.org \n"),
            vec!["example.com", "api.example.com", "www.example.org"]
        );
    }

    #[test]
    fn empty_manual_input_yields_no_domains() {
        assert!(parse_manual_input("   \n").is_empty());
    }

    #[test]
    fn file_keeps_order_and_skips_blanks() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("domains.txt");
        std::fs::write(&path, "b.example.com\n\n  a.example.com \n\n\nc.example.com").unwrap();

        let domains = read_domains_from_file(&path).unwrap();
        assert_eq!(domains, vec!["b.example.com", "a.example.com", "c.example.com"]);
    }

    #[test]
    fn file_keeps_duplicates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("domains.txt");
        std::fs::write(&path, "example.com\nexample.com\n").unwrap();

        assert_eq!(read_domains_from_file(&path).unwrap().len(), 2);
    }

    #[test]
    fn unreadable_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = read_domains_from_file(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, HeaderScanError::FileRead { .. }));
    }
}
