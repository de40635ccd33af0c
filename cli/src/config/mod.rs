use email_normalizer::NormalizationPolicy;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::info;

use crate::types::error::{PracticeError, Result};

/// Global configuration instance
static CONFIG: OnceCell<RwLock<AppConfig>> = OnceCell::new();

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Rules applied to every address before comparison
    pub normalization: NormalizationPolicy,

    /// How results are printed
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Get default config paths
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // XDG config path
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("email-normalizer").join("config.toml"));
    }

    // Home directory fallback
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(
            home_dir
                .join(".config")
                .join("email-normalizer")
                .join("config.toml"),
        );
        paths.push(home_dir.join(".email-normalizer.toml"));
    }

    paths
}

/// Initialize configuration from default paths, returning what was installed
pub fn init_config() -> Result<AppConfig> {
    info!("Initializing configuration from default paths");

    for path in default_config_paths() {
        if path.exists() {
            info!("Found config at: {:?}", path);
            return init_config_from_path(&path);
        }
    }

    // No config found, initialize with defaults
    info!("No config file found, using default config");
    reset_config()
}

/// Initialize configuration from a specific path, returning what was installed
pub fn init_config_from_path(path: &Path) -> Result<AppConfig> {
    let config = load_config(path)?;
    set_config(config.clone())?;
    Ok(config)
}

/// Read and parse a config file without installing it
pub fn load_config(path: &Path) -> Result<AppConfig> {
    info!("Loading configuration from: {:?}", path);

    let content = fs::read_to_string(path)
        .map_err(|e| PracticeError::Config(format!("Failed to read config: {}", e)))?;

    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig> {
    toml::from_str(content)
        .map_err(|e| PracticeError::Config(format!("Failed to parse config: {}", e)))
}

/// Fall back to the default configuration
pub fn reset_config() -> Result<AppConfig> {
    set_config(AppConfig::default())?;
    Ok(AppConfig::default())
}

/// Set the global configuration
fn set_config(config: AppConfig) -> Result<()> {
    match CONFIG.get() {
        Some(lock) => {
            let mut guard = lock
                .write()
                .map_err(|e| PracticeError::Config(format!("Failed to lock config: {}", e)))?;
            *guard = config;
        }
        None => {
            CONFIG.set(RwLock::new(config)).ok();
        }
    }
    Ok(())
}

/// Snapshot of the current configuration
pub fn get_config() -> Result<AppConfig> {
    let lock = CONFIG
        .get()
        .ok_or_else(|| PracticeError::Config("Configuration not initialized".into()))?;
    let guard = lock
        .read()
        .map_err(|e| PracticeError::Config(format!("Failed to lock config: {}", e)))?;
    Ok(guard.clone())
}

/// Check if configuration is initialized
pub fn is_initialized() -> bool {
    CONFIG.get().is_some()
}
