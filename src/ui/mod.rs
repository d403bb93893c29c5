// src/ui/mod.rs

// Everything the user sees on the terminal: prompts, per-domain findings
// and status lines.
pub mod console;
