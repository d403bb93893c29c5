// src/core/scanner/mod.rs

pub mod headers_scanner;

use tracing::info;

use crate::core::models::ScanResult;
use self::headers_scanner::HeadersScanner;

/// Scans every domain, one after the other, in input order.
///
/// Each domain is fully processed before the next request is sent:
/// `on_result` runs as soon as a result is available, and the result is
/// then appended to the returned table.
pub async fn scan_domains<F>(scanner: &HeadersScanner, domains: &[String], mut on_result: F) -> Vec<ScanResult>
where
    F: FnMut(&ScanResult),
{
    info!(count = domains.len(), "Starting scan of all domains.");
    let mut results = Vec::with_capacity(domains.len());
    for domain in domains {
        let result = scanner.scan(domain).await;
        on_result(&result);
        results.push(result);
    }

    let failed = results.iter().filter(|r| r.is_failed()).count();
    info!(scanned = results.len(), failed, "Scan of all domains finished.");
    results
}
