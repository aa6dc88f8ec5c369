use serde::Deserialize;
use std::path::Path;

/// Root application configuration. Loaded from environment variables
/// with the prefix `CAMPAIGN_METRICS__` and an optional TOML config file.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Path of the campaign CSV to read.
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// One of roas, ctr, cvr, cpa, spend, revenue. Anything else sorts by roas.
    #[serde(default = "default_sort_key")]
    pub sort_key: String,
    #[serde(default = "default_min_roas")]
    pub min_roas: f64,
    /// table, json or csv.
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_color")]
    pub color: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

// Default functions
fn default_sort_key() -> String {
    "roas".to_string()
}
fn default_min_roas() -> f64 {
    0.0
}
fn default_format() -> String {
    "table".to_string()
}
fn default_color() -> bool {
    true
}
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sort_key: default_sort_key(),
            min_roas: default_min_roas(),
            format: default_format(),
            color: default_color(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: None,
            report: ReportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and an optional config file.
    /// Environment values take precedence over the file.
    pub fn load(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("CAMPAIGN_METRICS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
