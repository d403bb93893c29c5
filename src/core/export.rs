// src/core/export.rs

use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::core::knowledge_base::csv_header;
use crate::core::models::{CsvRow, HeaderScanError, Result, ScanResult};

/// Writes the header row followed by one row per result.
pub fn write_csv<W: Write>(writer: W, results: &[ScanResult]) -> std::result::Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(csv_header())?;
    for result in results {
        wtr.serialize(CsvRow::from(result))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Creates (or truncates) the report file and writes every result into it.
pub fn save_results_to_csv(path: &Path, results: &[ScanResult]) -> Result<()> {
    let write_error = |source: csv::Error| HeaderScanError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(|e| write_error(e.into()))?;
    write_csv(file, results).map_err(write_error)?;

    info!(path = %path.display(), rows = results.len(), "CSV report saved.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ScanOutcome;
    use tempfile::tempdir;

    fn result(domain: &str, missing: &[&str], insecure: &[&str]) -> ScanResult {
        ScanResult {
            domain: domain.to_string(),
            outcome: ScanOutcome::Connected { status: 200 },
            missing: missing.iter().map(|s| s.to_string()).collect(),
            insecure: insecure.iter().map(|s| s.to_string()).collect(),
            security: vec!["strict-transport-security".into()],
            fingerprint: Vec::new(),
        }
    }

    #[test]
    fn one_row_per_result_plus_header() {
        let results = vec![
            result("a.example.com", &["x-frame-options", "content-security-policy"], &[]),
            result("b.example.com", &[], &["server"]),
            ScanResult::failed("c.example.com", "refused"),
        ];

        let mut out = Vec::new();
        write_csv(&mut out, &results).unwrap();

        let mut reader = csv::ReaderBuilder::new().has_headers(false).from_reader(out.as_slice());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), results.len() + 1);
        assert!(rows.iter().all(|r| r.len() == 5));
        assert_eq!(rows[0], vec!["URL", "Missing Headers", "Insecure Headers", "Security Headers", "Fingerprint Headers"]);
        assert_eq!(rows[1], vec!["a.example.com", "x-frame-options; content-security-policy", "", "strict-transport-security", ""]);
        assert_eq!(&rows[2][2], "server");
        assert_eq!(rows[3], vec!["c.example.com", "Failed to connect", "", "", ""]);
    }

    #[test]
    fn empty_table_still_has_header_row() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "URL,Missing Headers,Insecure Headers,Security Headers,Fingerprint Headers\n"
        );
    }

    #[test]
    fn overwrites_existing_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("header_analysis.csv");
        std::fs::write(&path, "stale contents\nmore\nmore\n").unwrap();

        save_results_to_csv(&path, &[result("example.com", &[], &[])]).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert_eq!(written.lines().count(), 2);
    }

    #[test]
    fn unwritable_path_is_a_write_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.csv");
        let err = save_results_to_csv(&path, &[]).unwrap_err();
        assert!(matches!(err, HeaderScanError::FileWrite { .. }));
    }
}
