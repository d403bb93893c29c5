// src/core/mod.rs

/// Data structures shared across the crate: reference header sets, scan
/// results, CSV rows and the error type.
pub mod models;

/// Static description of each header category.
pub mod knowledge_base;

/// Loading of the four reference header lists.
pub mod header_sets;

/// Domain input, from a file or a line of free text.
pub mod domains;

/// HTTP fetching and header classification.
pub mod scanner;

/// CSV report writer.
pub mod export;
