use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// JSON file replacing the built-in keyword catalog.
    pub keyword_catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        Ok(Config {
            port: match var("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes: match var("MAX_UPLOAD_BYTES") {
                Some(limit) => parse_upload_limit(&limit)?,
                None => defaults.max_upload_bytes,
            },
            keyword_catalog_path: var("KEYWORD_CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            keyword_catalog_path: None,
        }
    }
}

fn parse_upload_limit(raw: &str) -> Result<usize> {
    let limit = raw
        .trim()
        .parse::<usize>()
        .context("MAX_UPLOAD_BYTES must be a positive integer")?;
    anyhow::ensure!(limit > 0, "MAX_UPLOAD_BYTES must be greater than zero");
    Ok(limit)
}
