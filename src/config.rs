//! Configuration management

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listing daemon settings
    pub backend: BackendConfig,
    /// Display settings
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the remote-listing daemon
    pub url: String,
    /// Seconds to wait when establishing a connection
    pub connect_timeout_secs: u64,
    /// Seconds to wait for a listing response
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Append "/" to directory names in listings
    pub dir_suffix: bool,
    /// Theme preset name ("classic" or "dark")
    pub theme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dir_suffix: true,
            theme: "classic".to_string(),
        }
    }
}

/// Get the path to the config file (~/.config/barge/config.toml)
fn config_file() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("barge").join("config.toml"))
}

/// Default config file contents, written on first run
fn default_config() -> String {
    r#"# barge configuration
#
# barge talks to an rclone-style listing daemon to let you pick a source
# and destination remote for a transfer.

[backend]
# Base URL of the remote-listing daemon
url = "http://localhost:8000"
# Seconds to wait when establishing a connection
connect_timeout_secs = 10
# Seconds to wait for a listing response
request_timeout_secs = 30

[display]
# Append "/" to directory names in listings
dir_suffix = true
# Theme preset: "classic" or "dark"
theme = "classic"
"#
    .to_string()
}

/// Parse a config document
pub fn parse(content: &str) -> AppResult<Config> {
    toml_edit::de::from_str(content).map_err(|e| AppError::Config(e.to_string()))
}

impl Config {
    /// Load the config file, creating it with defaults on first run.
    /// Every failure path falls back to defaults with a warning.
    pub fn load() -> Self {
        let Some(config_path) = config_file() else {
            eprintln!("Warning: Could not determine config directory");
            return Config::default();
        };

        // Create config directory if it doesn't exist
        if let Some(config_dir) = config_path.parent()
            && !config_dir.exists()
            && let Err(e) = fs::create_dir_all(config_dir)
        {
            eprintln!("Warning: Could not create config directory: {}", e);
            return Config::default();
        }

        // Create default config if it doesn't exist
        if !config_path.exists()
            && let Err(e) = fs::write(&config_path, default_config())
        {
            eprintln!("Warning: Could not create config file: {}", e);
            return Config::default();
        }

        // Read and parse config
        match fs::read_to_string(&config_path) {
            Ok(content) => match parse(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Could not parse config file: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Could not read config file: {}", e);
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_matches_defaults() {
        let config = parse(&default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.backend.url, defaults.backend.url);
        assert_eq!(config.backend.connect_timeout_secs, defaults.backend.connect_timeout_secs);
        assert_eq!(config.backend.request_timeout_secs, defaults.backend.request_timeout_secs);
        assert_eq!(config.display.dir_suffix, defaults.display.dir_suffix);
        assert_eq!(config.display.theme, defaults.display.theme);
    }

    #[test]
    fn partial_files_keep_defaults_for_the_rest() {
        let config = parse("[backend]\nurl = \"http://10.0.0.5:8000\"\n").unwrap();
        assert_eq!(config.backend.url, "http://10.0.0.5:8000");
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert_eq!(config.display.theme, "classic");
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = parse("backend = ][").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
