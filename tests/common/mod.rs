//! Common test utilities

use std::path::Path;
use std::time::Duration;
use vanguard_headers::config::{DomainInput, ScanConfig};

/// Writes the four reference lists into `dir` and returns a config reading them.
pub fn write_lists(dir: &Path) -> ScanConfig {
    std::fs::write(
        dir.join("missing.txt"),
        "# required\nContent-Security-Policy\nX-Frame-Options\nStrict-Transport-Security\n",
    )
    .unwrap();
    std::fs::write(dir.join("insecure.txt"), "Server\nX-Powered-By\n").unwrap();
    std::fs::write(
        dir.join("security.txt"),
        "Content-Security-Policy\nStrict-Transport-Security\nX-Frame-Options\n",
    )
    .unwrap();
    std::fs::write(dir.join("fingerprint.txt"), "Server\nX-Powered-By\nX-AspNet-Version\n").unwrap();

    ScanConfig {
        output: dir.join("header_analysis.csv"),
        timeout: Duration::from_secs(5),
        input: DomainInput::Prompt,
        ..ScanConfig::with_lists_dir(dir)
    }
}
