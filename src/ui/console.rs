// src/ui/console.rs

use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

use crate::core::knowledge_base::{CategoryDetail, category_detail};
use crate::core::models::{HeaderCategory, ScanResult};

/// Category order on screen. Security comes first and is always printed.
const DISPLAY_ORDER: [HeaderCategory; 4] = [
    HeaderCategory::Security,
    HeaderCategory::Missing,
    HeaderCategory::Insecure,
    HeaderCategory::Fingerprint,
];

/// Prints the color-coded findings for one domain.
///
/// Write errors are ignored: the report is best-effort terminal output.
pub fn render_result<W: Write>(out: &mut W, result: &ScanResult) {
    let _ = writeln!(out, "\n🔎 Scanning: {}", result.domain.as_str().cyan());
    for category in DISPLAY_ORDER {
        render_category(out, category_detail(category), result.headers(category));
    }
}

fn render_category<W: Write>(out: &mut W, detail: &CategoryDetail, headers: &[String]) {
    match (headers.is_empty(), detail.empty_message) {
        (true, Some(message)) => {
            let _ = writeln!(out, "{}", message);
        }
        // Security is printed even when empty; fingerprint is skipped.
        (true, None) if detail.category != HeaderCategory::Security => {}
        _ => {
            let _ = writeln!(out, "{} {}", detail.label, headers.join(", ").with(detail.color));
        }
    }
}

pub fn render_error<W: Write>(out: &mut W, message: &str) {
    let _ = writeln!(out, "{}", message.red());
}

pub fn render_success<W: Write>(out: &mut W, message: &str) {
    let _ = writeln!(out, "{}", message.green());
}

/// Shows `message` and reads one line of input, without its line ending.
///
/// End of input reads as an empty line.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> io::Result<String> {
    write!(out, "{}", message)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
