//! Configuration types for the OrgLead backend.
//!
//! `AppConfig` mirrors `config.toml`. Every section and field has a default,
//! so an empty file (or no file) yields a runnable configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub chat: ChatBackendConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database settings. When `url` is unset the database lives in the data
/// directory as `orglead.db`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
}

/// External chat backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatBackendConfig {
    #[serde(default = "default_chat_base_url")]
    pub base_url: String,

    /// Upper bound for a whole chat round trip.
    #[serde(default = "default_chat_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_chat_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_chat_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_chat_timeout_secs() -> u64 {
    30
}

fn default_chat_connect_timeout_secs() -> u64 {
    5
}

impl Default for ChatBackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_chat_base_url(),
            timeout_secs: default_chat_timeout_secs(),
            connect_timeout_secs: default_chat_connect_timeout_secs(),
        }
    }
}

/// Tracing subscriber settings. `RUST_LOG` takes precedence over `filter`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[serde(default)]
    pub otel: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
            otel: false,
        }
    }
}
