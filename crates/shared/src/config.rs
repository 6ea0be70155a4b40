//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ledger book configuration.
    #[serde(default)]
    pub book: BookConfig,
    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Ledger book configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BookConfig {
    /// Path of the JSON ledger book.
    #[serde(default = "default_book_path")]
    pub path: String,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            path: default_book_path(),
        }
    }
}

fn default_book_path() -> String {
    "book.json".to_string()
}

/// Report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Report title.
    #[serde(default = "default_report_title")]
    pub title: String,
    /// Currency symbol appended to amounts in the rendered report.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_report_title(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_report_title() -> String {
    "DEPRECIATION SCHEDULE".to_string()
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of the compact text format.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "writedown=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("WRITEDOWN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
