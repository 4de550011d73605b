//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the widget
//! is built. A `.env` file in the working directory is honored (loaded via
//! `dotenvy::dotenv()` in `main.rs`).
//!
//! ## Variables
//!
//! - `SHORTENER_API_URL` - Base URL of the shortening API
//!   (default: `https://api.shrtco.de/v2/`)
//! - `SHORTENER_TIMEOUT_SECS` - Bound on each shortening request (default: 10, range 1-300)
//! - `SHORTLY_STORAGE_PATH` - JSON file holding the link list (default: `shortly-links.json`)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::infrastructure::shortener::DEFAULT_API_URL;

const DEFAULT_STORAGE_PATH: &str = "shortly-links.json";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 300;

/// Widget configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the shortening API, always ending in `/`.
    pub api_url: String,
    /// Seconds a submission waits for the service before giving up.
    pub request_timeout_secs: u64,
    pub storage_path: PathBuf,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SHORTENER_TIMEOUT_SECS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_url = env::var("SHORTENER_API_URL")
            .map(|url| with_trailing_slash(url.trim()))
            .unwrap_or(defaults.api_url);

        let request_timeout_secs = match env::var("SHORTENER_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("SHORTENER_TIMEOUT_SECS must be a number, got '{raw}'"))?,
            Err(_) => defaults.request_timeout_secs,
        };

        let storage_path = env::var("SHORTLY_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_path);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            api_url,
            request_timeout_secs,
            storage_path,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_url` is not an absolute `http` or `https` URL
    /// - `request_timeout_secs` is outside 1-300
    /// - `storage_path` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let api_url = Url::parse(&self.api_url)
            .with_context(|| format!("SHORTENER_API_URL is not a valid URL: '{}'", self.api_url))?;

        if api_url.scheme() != "http" && api_url.scheme() != "https" {
            anyhow::bail!(
                "SHORTENER_API_URL must use http or https, got '{}'",
                api_url.scheme()
            );
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!(
                "SHORTENER_TIMEOUT_SECS must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS,
                self.request_timeout_secs
            );
        }

        if self.storage_path.as_os_str().is_empty() {
            anyhow::bail!("SHORTLY_STORAGE_PATH must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Shortening API: {}", self.api_url);
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::info!("  Storage file: {}", self.storage_path.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
