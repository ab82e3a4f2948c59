use serde::Deserialize;

use crate::engine::types::AggregationType;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults the evaluator falls back to when a report leaves them open.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportConfig {
    /// Used whenever a report requests no explicit aggregation types
    #[serde(default = "default_aggregation_types")]
    pub default_aggregation_types: Vec<AggregationType>,
    /// Maximum number of groups materialized when the report sets no limit
    #[serde(default = "default_bucket_limit")]
    pub default_bucket_limit: usize,
    /// Presentation key of the distribution holding tasks without candidate group
    #[serde(default = "default_unassigned_key")]
    pub unassigned_key: String,
    #[serde(default = "default_unassigned_label")]
    pub unassigned_label: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_aggregation_types: default_aggregation_types(),
            default_bucket_limit: default_bucket_limit(),
            unassigned_key: default_unassigned_key(),
            unassigned_label: default_unassigned_label(),
        }
    }
}

impl ReportConfig {
    /// Report defaults from the application configuration
    pub fn from_app_config() -> Self {
        crate::shared::config::CONFIG.report.clone()
    }
}

fn default_aggregation_types() -> Vec<AggregationType> {
    vec![AggregationType::Avg]
}

fn default_bucket_limit() -> usize {
    1000
}

fn default_unassigned_key() -> String {
    "__unassigned__".to_string()
}

fn default_unassigned_label() -> String {
    "Unassigned".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            stdout_level: "info".to_string(),
            file_level: "debug".to_string(),
        }
    }
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("REPORT_ENGINE_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
