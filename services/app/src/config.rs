//! services/app/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: Level,
    /// Absent keys are tolerated at startup; generation enforces the
    /// precondition per call so the vault screens still work offline.
    pub gemini_api_key: Option<String>,
    pub quote_model: String,
    pub advice_model: String,
    pub vault_path: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Load API Key (as optional) ---
        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok();

        // --- Load Adapter-specific Settings ---
        let quote_model =
            std::env::var("QUOTE_MODEL").unwrap_or_else(|_| "gemini-2.5-flash-lite".to_string());
        let advice_model =
            std::env::var("ADVICE_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        let vault_path = std::env::var("VAULT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_vault_path());

        Ok(Self {
            log_level,
            gemini_api_key,
            quote_model,
            advice_model,
            vault_path,
        })
    }
}

/// The default on-disk location of the saved-quotes vault.
fn default_vault_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("specter")
        .join("specter_saved_quotes.json")
}
