//! Project path functions - single source of truth for file locations.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: "data")
//!
//! This allows keeping separate progress files side by side:
//! ```bash
//! DATA_DIR=data/alice cargo run --bin physics-tutor
//! DATA_DIR=data/bob cargo run --bin physics-tutor
//! ```

use std::env;
use std::sync::OnceLock;

/// Lazily initialized data directory from DATA_DIR env var
static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Get the base data directory (from DATA_DIR env var or default "data")
pub fn data_dir() -> &'static str {
    DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()))
}

/// Default progress file path
pub fn progress_path() -> String {
    format!("{}/progress.json", data_dir())
}

/// Conventional location for a custom question bank
pub fn question_bank_path() -> String {
    format!("{}/questions.json", data_dir())
}
