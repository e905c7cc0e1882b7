//! Application configuration.
//!
//! File locations are resolved with priority: config.toml > environment
//! (including `.env`) > defaults from [`crate::paths`].
//!
//! ```toml
//! [progress]
//! path = "data/progress.json"
//!
//! [questions]
//! path = "data/questions.json"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::paths;

/// Configuration file name looked up in the working directory
pub const CONFIG_FILE: &str = "config.toml";

// ==================== File Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    pub progress: Option<PathConfig>,
    pub questions: Option<PathConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PathConfig {
    pub path: Option<String>,
}

impl AppConfig {
    fn progress_path(&self) -> Option<PathBuf> {
        self.progress.as_ref()?.path.as_ref().map(PathBuf::from)
    }

    fn questions_path(&self) -> Option<PathBuf> {
        self.questions.as_ref()?.path.as_ref().map(PathBuf::from)
    }
}

/// Parse config.toml contents; malformed files are logged and ignored
pub fn parse_config(contents: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring malformed {}: {}", CONFIG_FILE, e);
            AppConfig::default()
        }
    }
}

/// Read config.toml from the working directory, if present
pub fn load_config() -> AppConfig {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    std::fs::read_to_string(CONFIG_FILE)
        .map(|contents| parse_config(&contents))
        .unwrap_or_default()
}

/// Resolve the progress file path
pub fn progress_path(config: &AppConfig) -> PathBuf {
    if let Some(path) = config.progress_path() {
        tracing::info!("Using progress file from {}: {}", CONFIG_FILE, path.display());
        return path;
    }

    if let Ok(path) = std::env::var("PROGRESS_FILE") {
        tracing::info!("Using progress file from PROGRESS_FILE env: {}", path);
        return PathBuf::from(path);
    }

    let default = PathBuf::from(paths::progress_path());
    tracing::info!("Using default progress file: {}", default.display());
    default
}

/// Resolve the question bank path; `None` selects the built-in bank
pub fn question_bank_path(config: &AppConfig) -> Option<PathBuf> {
    if let Some(path) = config.questions_path() {
        tracing::info!("Using question bank from {}: {}", CONFIG_FILE, path.display());
        return Some(path);
    }

    if let Ok(path) = std::env::var("QUESTION_BANK") {
        tracing::info!("Using question bank from QUESTION_BANK env: {}", path);
        return Some(PathBuf::from(path));
    }

    let conventional = paths::question_bank_path();
    if Path::new(&conventional).exists() {
        tracing::info!("Using question bank at {}", conventional);
        return Some(PathBuf::from(conventional));
    }

    tracing::info!("Using built-in question bank");
    None
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Default server port
pub const SERVER_PORT: u16 = 3000;

/// Server port (PORT env var or default)
pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(SERVER_PORT)
}

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, server_port())
}

// ==================== Session Configuration ====================

/// Name of the cookie carrying the quiz session ID
pub const SESSION_COOKIE_NAME: &str = "tutor_session";

/// Session expiration time in hours
pub const SESSION_EXPIRY_HOURS: i64 = 1;

/// Probability threshold for session cleanup (0-255, lower = more frequent)
/// Value of 25 means ~10% chance (25/256) on each session access
pub const SESSION_CLEANUP_THRESHOLD: u8 = 25;
