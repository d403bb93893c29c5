// src/core/models.rs

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use strum::{Display, EnumIter};

// --- Errors ---

/// Every failure the scanner knows how to report.
///
/// `FileRead` and `Client` abort the run before any domain is scanned,
/// `Network` is recovered per domain, `FileWrite` is reported at the end.
#[derive(Debug, thiserror::Error)]
pub enum HeaderScanError {
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, HeaderScanError>;

// --- Reference Sets ---

/// The four kinds of header list the scanner classifies against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum HeaderCategory {
    Missing,
    Insecure,
    Security,
    Fingerprint,
}

/// A set of lower-cased header names, loaded once per run.
///
/// Backed by a `BTreeSet` so iteration, and therefore the order of reported
/// missing headers, is lexicographic and stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet(BTreeSet<String>);

impl HeaderSet {
    /// Inserts a header name, normalizing it to lower case.
    pub fn insert(&mut self, name: &str) -> bool {
        self.0.insert(name.to_lowercase())
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(&name.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = HeaderSet::default();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

/// The four reference lists bundled together.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSets {
    pub missing: HeaderSet,
    pub insecure: HeaderSet,
    pub security: HeaderSet,
    pub fingerprint: HeaderSet,
}

impl ReferenceSets {
    pub fn get_mut(&mut self, category: HeaderCategory) -> &mut HeaderSet {
        match category {
            HeaderCategory::Missing => &mut self.missing,
            HeaderCategory::Insecure => &mut self.insecure,
            HeaderCategory::Security => &mut self.security,
            HeaderCategory::Fingerprint => &mut self.fingerprint,
        }
    }
}

// --- Scan Results ---

/// Placeholder written into `missing` when a domain could not be reached.
pub const FAILED_TO_CONNECT: &str = "Failed to connect";

/// How the request for a domain ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Connected { status: u16 },
    Failed { reason: String },
}

/// Classification of one domain's response headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub domain: String,
    pub outcome: ScanOutcome,
    pub missing: Vec<String>,
    pub insecure: Vec<String>,
    pub security: Vec<String>,
    pub fingerprint: Vec<String>,
}

impl ScanResult {
    /// The synthetic result recorded for a domain that could not be reached.
    pub fn failed(domain: &str, reason: impl Into<String>) -> Self {
        Self {
            domain: domain.to_string(),
            outcome: ScanOutcome::Failed { reason: reason.into() },
            missing: vec![FAILED_TO_CONNECT.to_string()],
            insecure: Vec::new(),
            security: Vec::new(),
            fingerprint: Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, ScanOutcome::Failed { .. })
    }

    pub fn headers(&self, category: HeaderCategory) -> &[String] {
        match category {
            HeaderCategory::Missing => &self.missing,
            HeaderCategory::Insecure => &self.insecure,
            HeaderCategory::Security => &self.security,
            HeaderCategory::Fingerprint => &self.fingerprint,
        }
    }
}

/// One line of the CSV report. Field order is the column order.
#[derive(Debug, Serialize)]
pub struct CsvRow<'a> {
    pub url: &'a str,
    pub missing: String,
    pub insecure: String,
    pub security: String,
    pub fingerprint: String,
}

impl<'a> From<&'a ScanResult> for CsvRow<'a> {
    fn from(result: &'a ScanResult) -> Self {
        Self {
            url: &result.domain,
            missing: result.missing.join("; "),
            insecure: result.insecure.join("; "),
            security: result.security.join("; "),
            fingerprint: result.fingerprint.join("; "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_set_is_case_insensitive() {
        let set: HeaderSet = ["X-Frame-Options", "x-frame-options", "Server"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("X-FRAME-OPTIONS"));
        assert!(set.contains("server"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["server", "x-frame-options"]);
    }

    #[test]
    fn failed_result_has_only_placeholder() {
        let result = ScanResult::failed("example.com", "timed out");
        assert!(result.is_failed());
        assert_eq!(result.missing, vec![FAILED_TO_CONNECT]);
        assert!(result.insecure.is_empty());
        assert!(result.security.is_empty());
        assert!(result.fingerprint.is_empty());
    }

    #[test]
    fn csv_row_joins_with_semicolons() {
        let result = ScanResult {
            domain: "example.com".into(),
            outcome: ScanOutcome::Connected { status: 200 },
            missing: vec!["a".into(), "b".into()],
            insecure: vec![],
            security: vec!["c".into()],
            fingerprint: vec!["d".into(), "e".into(), "f".into()],
        };
        let row = CsvRow::from(&result);
        assert_eq!(row.url, "example.com");
        assert_eq!(row.missing, "a; b");
        assert_eq!(row.insecure, "");
        assert_eq!(row.security, "c");
        assert_eq!(row.fingerprint, "d; e; f");
    }
}
