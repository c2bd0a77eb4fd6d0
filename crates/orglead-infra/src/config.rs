//! Configuration loader for the OrgLead backend.
//!
//! Reads `config.toml` (from an explicit path or the data directory) into
//! [`AppConfig`], then applies environment overrides. Falls back to
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use orglead_types::config::AppConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ORGLEAD_DATA_DIR";
/// Environment variable overriding `database.url`.
pub const DATABASE_URL_ENV: &str = "ORGLEAD_DATABASE_URL";
/// Environment variable overriding `chat.base_url`.
pub const CHAT_URL_ENV: &str = "ORGLEAD_CHAT_URL";

/// Resolve the data directory.
///
/// Priority:
/// 1. `ORGLEAD_DATA_DIR` environment variable
/// 2. `~/.orglead`
/// 3. `.orglead` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".orglead");
    }

    PathBuf::from(".orglead")
}

/// Outcome of [`load_config`].
///
/// `warnings` holds problems found while reading the file, for the caller to
/// log once the tracing subscriber is installed.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub warnings: Vec<String>,
}

/// Load configuration from `path`, or `{data_dir}/config.toml` when `path`
/// is `None`, then apply environment overrides.
///
/// - If the file does not exist, starts from [`AppConfig::default()`].
/// - If the file cannot be read or parsed, starts from the default and
///   records a warning.
pub async fn load_config(path: Option<&Path>, data_dir: &Path) -> LoadedConfig {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| data_dir.join("config.toml"));

    let (mut config, warning) = read_config_file(&config_path).await;
    apply_overrides(&mut config, |key| std::env::var(key).ok());

    LoadedConfig {
        config,
        warnings: warning.into_iter().collect(),
    }
}

async fn read_config_file(config_path: &Path) -> (AppConfig, Option<String>) {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return (AppConfig::default(), None);
        }
        Err(err) => {
            let warning = format!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return (AppConfig::default(), Some(warning));
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => (config, None),
        Err(err) => {
            let warning = format!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            (AppConfig::default(), Some(warning))
        }
    }
}

/// Apply overrides from a variable lookup (the process environment in production).
fn apply_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(DATABASE_URL_ENV).filter(|v| !v.is_empty()) {
        config.database.url = Some(url);
    }
    if let Some(url) = lookup(CHAT_URL_ENV).filter(|v| !v.is_empty()) {
        config.chat.base_url = url;
    }
}
