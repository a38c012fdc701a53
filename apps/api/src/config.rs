use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::scoring::ScoringProfile;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; a value that is set but malformed fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Per-document limit for `/api/v1/analyze/upload`.
    pub max_upload_bytes: usize,
    pub scoring_profile: ScoringProfile,
    /// JSON file replacing the built-in keyword dictionary.
    pub keyword_dictionary_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            scoring_profile: ScoringProfile::default(),
            keyword_dictionary_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            scoring_profile: match optional_env("SCORING_PROFILE") {
                Some(raw) => raw
                    .parse::<ScoringProfile>()
                    .context("SCORING_PROFILE is invalid")?,
                None => ScoringProfile::default(),
            },
            keyword_dictionary_path: optional_env("KEYWORD_DICTIONARY_PATH").map(PathBuf::from),
        })
    }
}

/// Unset and blank are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
