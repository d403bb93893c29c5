//! Static, read-only descriptions of the four header categories.
//! Everything that differs between categories (where the list lives on disk,
//! how findings are labelled on screen, which CSV column they land in) is
//! kept here so the loader, the reporter and the exporter stay data-driven.

use crate::core::models::HeaderCategory;
use crossterm::style::Color;

/// Presentation and storage details for one header category.
pub struct CategoryDetail {
    pub category: HeaderCategory,
    /// File name of the reference list inside the lists directory.
    pub list_file: &'static str,
    /// Prefix printed before the headers found in this category.
    pub label: &'static str,
    /// Line printed instead when the category is empty. `None` means the
    /// category is not printed at all when empty.
    pub empty_message: Option<&'static str>,
    pub color: Color,
    pub csv_column: &'static str,
}

/// Column title for the domain column of the CSV report.
pub const CSV_URL_COLUMN: &str = "URL";

static CATEGORIES: [CategoryDetail; 4] = [
    CategoryDetail {
        category: HeaderCategory::Missing,
        list_file: "missing.txt",
        label: "🟡 Missing Headers:",
        empty_message: Some("✅ No missing headers!"),
        color: Color::Yellow,
        csv_column: "Missing Headers",
    },
    CategoryDetail {
        category: HeaderCategory::Insecure,
        list_file: "insecure.txt",
        label: "🔴 Insecure Headers:",
        empty_message: Some("✅ No insecure headers detected."),
        color: Color::Red,
        csv_column: "Insecure Headers",
    },
    CategoryDetail {
        category: HeaderCategory::Security,
        list_file: "security.txt",
        label: "🟢 Security Headers Found:",
        empty_message: None,
        color: Color::Green,
        csv_column: "Security Headers",
    },
    CategoryDetail {
        category: HeaderCategory::Fingerprint,
        list_file: "fingerprint.txt",
        label: "🔍 Technologies Detected (Fingerprint):",
        empty_message: None,
        color: Color::Blue,
        csv_column: "Fingerprint Headers",
    },
];

/// Retrieves the detail entry for a category.
pub fn category_detail(category: HeaderCategory) -> &'static CategoryDetail {
    match category {
        HeaderCategory::Missing => &CATEGORIES[0],
        HeaderCategory::Insecure => &CATEGORIES[1],
        HeaderCategory::Security => &CATEGORIES[2],
        HeaderCategory::Fingerprint => &CATEGORIES[3],
    }
}

/// The CSV header row, in column order.
pub fn csv_header() -> [&'static str; 5] {
    [
        CSV_URL_COLUMN,
        category_detail(HeaderCategory::Missing).csv_column,
        category_detail(HeaderCategory::Insecure).csv_column,
        category_detail(HeaderCategory::Security).csv_column,
        category_detail(HeaderCategory::Fingerprint).csv_column,
    ]
}
