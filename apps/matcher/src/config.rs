use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default, so a bare environment works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional path to a roster JSON file; the embedded demo roster is used
    /// when unset.
    pub roster_path: Option<PathBuf>,
    /// Default number of ranked matches the CLI displays.
    pub display_limit: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            roster_path: std::env::var("MATCHER_ROSTER").ok().map(PathBuf::from),
            display_limit: std::env::var("MATCHER_DISPLAY_LIMIT")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<usize>()
                .context("MATCHER_DISPLAY_LIMIT must be a non-negative integer")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
