//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Email configuration.
    pub email: EmailConfig,
    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Email (SMTP) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// SMTP host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username.
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password.
    #[serde(default)]
    pub smtp_password: String,
    /// Sender display name.
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Sender address.
    #[serde(default = "default_from_email")]
    pub from_email: String,
    /// Report recipient addresses.
    #[serde(default)]
    pub recipients: Vec<String>,
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

fn default_from_name() -> String {
    "Dispatch Reports".to_string()
}

fn default_from_email() -> String {
    "reports@dispatch.local".to_string()
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_name: default_from_name(),
            from_email: default_from_email(),
            recipients: Vec::new(),
        }
    }
}

/// Report configuration.
///
/// The status codes are legacy business constants carried over from the
/// dispatch system of record; they are configuration rather than hard-coded
/// values because their taxonomy is owned by the business.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Driver-type classification selected by default ("C" = contractor).
    #[serde(default = "default_driver_type")]
    pub driver_type: String,
    /// Order status treated as open/non-complete.
    #[serde(default = "default_open_status")]
    pub open_status: String,
    /// Status codes excluded from the complete count.
    #[serde(default = "default_non_complete_statuses")]
    pub non_complete_statuses: Vec<String>,
    /// Directory the spreadsheet export is written to.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

fn default_driver_type() -> String {
    "C".to_string()
}

fn default_open_status() -> String {
    "N".to_string()
}

fn default_non_complete_statuses() -> Vec<String> {
    vec!["N".to_string(), "D".to_string(), "L".to_string()]
}

fn default_export_dir() -> String {
    ".".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            driver_type: default_driver_type(),
            open_status: default_open_status(),
            non_complete_statuses: default_non_complete_statuses(),
            export_dir: default_export_dir(),
        }
    }
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
            .add_source(config::Environment::with_prefix("DISPATCH").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
