// src/app.rs

use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};

use crate::config::{DomainInput, ScanConfig};
use crate::core::domains::{parse_manual_input, read_domains_from_file};
use crate::core::export::save_results_to_csv;
use crate::core::header_sets::load_reference_sets;
use crate::core::models::{HeaderScanError, Result, ScanResult};
use crate::core::scanner::headers_scanner::HeadersScanner;
use crate::core::scanner::scan_domains;
use crate::ui::console;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Idle,
    Success(PathBuf),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Idle,
    Scanning,
    Finished,
    /// Setup failed before any domain was scanned.
    Aborted,
}

/// Drives one run: load lists, get domains, scan, report, export.
pub struct App {
    pub config: ScanConfig,
    pub state: AppState,
    pub results: Vec<ScanResult>,
    pub export_status: ExportStatus,
}

impl App {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            state: AppState::Idle,
            results: Vec::new(),
            export_status: ExportStatus::Idle,
        }
    }

    /// Runs the whole pipeline, prompting on `input` and reporting on `out`.
    ///
    /// Setup failures are printed and end the run with [`AppState::Aborted`];
    /// unreachable domains and a failed export do not abort.
    pub async fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) {
        let sets = match load_reference_sets(&self.config) {
            Ok(sets) => sets,
            Err(e) => return self.abort(out, "Error loading header lists", &e),
        };

        let scanner = match HeadersScanner::new(&self.config, sets) {
            Ok(scanner) => scanner,
            Err(e) => return self.abort(out, "Error building HTTP client", &e),
        };

        let domains = match self.acquire_domains(input, out) {
            Ok(domains) => domains,
            Err(e) => return self.abort(out, "Error reading file", &e),
        };

        self.state = AppState::Scanning;
        self.results = scan_domains(&scanner, &domains, |result| console::render_result(out, result)).await;

        self.export(out);
        self.state = AppState::Finished;
    }

    fn acquire_domains<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<Vec<String>> {
        let file = match &self.config.input {
            DomainInput::File(path) => path.clone(),
            DomainInput::Manual(domains) => {
                return Ok(domains.iter().flat_map(|d| parse_manual_input(d)).collect());
            }
            DomainInput::Prompt => {
                let name = console::prompt(input, out, "📄 Enter domain file name (or press ENTER for manual input): ")
                    .map_err(stdin_error)?;
                let name = name.trim();
                if name.is_empty() {
                    let line = console::prompt(input, out, "📝 Enter domains/subdomains (space-separated): ")
                        .map_err(stdin_error)?;
                    return Ok(parse_manual_input(&line));
                }
                PathBuf::from(name)
            }
        };

        let domains = read_domains_from_file(&file)?;
        console::render_success(out, &format!("✅ Loaded {} domains from file.", domains.len()));
        Ok(domains)
    }

    fn export<W: Write>(&mut self, out: &mut W) {
        let path = &self.config.output;
        self.export_status = match save_results_to_csv(path, &self.results) {
            Ok(()) => {
                console::render_success(out, &format!("📄 Results saved in '{}'", path.display()));
                ExportStatus::Success(path.clone())
            }
            Err(e) => {
                error!(error = %e, "CSV export failed.");
                console::render_error(out, &format!("Error saving CSV: {}", e));
                ExportStatus::Error(e.to_string())
            }
        };
    }

    fn abort<W: Write>(&mut self, out: &mut W, context: &str, e: &HeaderScanError) {
        error!(error = %e, "{}", context);
        console::render_error(out, &format!("{}: {}", context, e));
        self.state = AppState::Aborted;
        info!("Run aborted before scanning.");
    }
}

fn stdin_error(source: std::io::Error) -> HeaderScanError {
    HeaderScanError::FileRead {
        path: PathBuf::from("<stdin>"),
        source,
    }
}
