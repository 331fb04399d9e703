use std::path::PathBuf;

use anyhow::{Context, Result};

/// Local development endpoint, used unless overridden or `APP_ENV=production`.
pub const DEV_BASE_URL: &str = "http://localhost:8000";
/// Production endpoint of the analysis service.
pub const PROD_BASE_URL: &str = "https://jobmatch-backend-production.up.railway.app";

/// Application configuration resolved once at startup and injected into the
/// transport and storage layers. Business logic never reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the analysis service (no trailing `/analyse`).
    pub base_url: String,
    /// Directory backing the file key-value store.
    pub storage_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let base_url = match std::env::var("ANALYSIS_BASE_URL") {
            Ok(url) => url,
            Err(_) if std::env::var("APP_ENV").as_deref() == Ok("production") => {
                PROD_BASE_URL.to_string()
            }
            Err(_) => DEV_BASE_URL.to_string(),
        };
        reqwest::Url::parse(&base_url)
            .context("ANALYSIS_BASE_URL must be a valid absolute URL")?;

        Ok(Config {
            base_url,
            storage_dir: std::env::var("JOBMATCH_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".jobmatch")),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
