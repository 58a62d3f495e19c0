//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `WANDERPLAN` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use wanderplan::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Plans stored under {}", config.storage.data_dir().display());
//! ```

mod error;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Plan storage configuration (data directory)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter directive for embedders installing a subscriber
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables with the `WANDERPLAN` prefix:
    ///
    /// - `WANDERPLAN__STORAGE__DATA_DIR=/var/lib/wanderplan` ->
    ///   `storage.data_dir = /var/lib/wanderplan`
    /// - `WANDERPLAN__LOG_FILTER=debug` -> `log_filter = debug`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WANDERPLAN")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        if self.log_filter.trim().is_empty() {
            return Err(ValidationError::EmptyLogFilter);
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info,wanderplan=debug".to_string()
}
