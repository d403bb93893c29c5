// src/config.rs

use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::knowledge_base::category_detail;
use crate::core::models::HeaderCategory;

pub const DEFAULT_LISTS_DIR: &str = "files";
pub const DEFAULT_OUTPUT: &str = "header_analysis.csv";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fetches HTTP response headers for a list of domains and flags missing,
/// insecure, security and fingerprinting headers.
///
/// Without `--domains-file` or `--domains` the tool prompts for input.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Directory holding missing.txt, insecure.txt, security.txt and fingerprint.txt
    #[arg(long, default_value = DEFAULT_LISTS_DIR)]
    pub lists_dir: PathBuf,

    /// Override the list of headers that must be present
    #[arg(long)]
    pub missing_list: Option<PathBuf>,

    /// Override the list of insecure headers
    #[arg(long)]
    pub insecure_list: Option<PathBuf>,

    /// Override the list of recommended security headers
    #[arg(long)]
    pub security_list: Option<PathBuf>,

    /// Override the list of fingerprinting headers
    #[arg(long)]
    pub fingerprint_list: Option<PathBuf>,

    /// Where to write the CSV report
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Per-domain request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS,
          value_parser = clap::value_parser!(u64).range(1..=300))]
    pub timeout: u64,

    /// Send this User-Agent; by default no User-Agent header is sent
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Read domains from this file, one per line
    #[arg(short = 'f', long, conflicts_with = "domains")]
    pub domains_file: Option<PathBuf>,

    /// Domains to scan, skipping the interactive prompt
    #[arg(short, long, num_args = 1..)]
    pub domains: Vec<String>,
}

/// Where the domains come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainInput {
    /// Ask on stdin.
    Prompt,
    File(PathBuf),
    Manual(Vec<String>),
}

/// Run settings handed to the loader, the scanner and the exporter.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub missing_list: PathBuf,
    pub insecure_list: PathBuf,
    pub security_list: PathBuf,
    pub fingerprint_list: PathBuf,
    pub output: PathBuf,
    pub timeout: Duration,
    pub user_agent: Option<String>,
    pub input: DomainInput,
}

impl ScanConfig {
    /// Default settings with every list read from `dir`.
    pub fn with_lists_dir(dir: &Path) -> Self {
        let list = |category| dir.join(category_detail(category).list_file);
        Self {
            missing_list: list(HeaderCategory::Missing),
            insecure_list: list(HeaderCategory::Insecure),
            security_list: list(HeaderCategory::Security),
            fingerprint_list: list(HeaderCategory::Fingerprint),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
            input: DomainInput::Prompt,
        }
    }

    pub fn list_path(&self, category: HeaderCategory) -> PathBuf {
        match category {
            HeaderCategory::Missing => self.missing_list.clone(),
            HeaderCategory::Insecure => self.insecure_list.clone(),
            HeaderCategory::Security => self.security_list.clone(),
            HeaderCategory::Fingerprint => self.fingerprint_list.clone(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::with_lists_dir(Path::new(DEFAULT_LISTS_DIR))
    }
}

impl From<Cli> for ScanConfig {
    fn from(cli: Cli) -> Self {
        let defaults = Self::with_lists_dir(&cli.lists_dir);
        let input = match (cli.domains_file, cli.domains.is_empty()) {
            (Some(path), _) => DomainInput::File(path),
            (None, false) => DomainInput::Manual(cli.domains),
            (None, true) => DomainInput::Prompt,
        };
        Self {
            missing_list: cli.missing_list.unwrap_or(defaults.missing_list),
            insecure_list: cli.insecure_list.unwrap_or(defaults.insecure_list),
            security_list: cli.security_list.unwrap_or(defaults.security_list),
            fingerprint_list: cli.fingerprint_list.unwrap_or(defaults.fingerprint_list),
            output: cli.output,
            timeout: Duration::from_secs(cli.timeout),
            user_agent: cli.user_agent,
            input,
        }
    }
}
