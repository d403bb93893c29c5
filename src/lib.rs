// src/lib.rs

//! Audits the HTTP response headers of a list of domains against four
//! reference lists (required, insecure, security and fingerprinting headers),
//! prints color-coded findings and writes a CSV summary.

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod ui;
