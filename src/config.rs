//! Configuration Management
//!
//! Handles persistent configuration storage for maury.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// API root used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://api.engineyard.com";

/// Environment variable overriding the API root
pub const BASE_URL_ENV: &str = "MAURY_BASE_URL";

/// Environment variable carrying the API token
pub const TOKEN_ENV: &str = "MAURY_TOKEN";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// API root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// API token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("maury").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load configuration from `path`, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        self.save_to(&path)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get effective base URL (CLI > environment > config > default)
    pub fn effective_base_url(&self, cli: Option<&str>) -> String {
        pick(cli, std::env::var(BASE_URL_ENV).ok(), self.base_url.as_deref())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Get effective token (CLI > environment > config)
    pub fn effective_token(&self, cli: Option<&str>) -> Option<String> {
        pick(cli, std::env::var(TOKEN_ENV).ok(), self.token.as_deref())
    }
}

/// First non-empty value in precedence order
fn pick(cli: Option<&str>, env: Option<String>, file: Option<&str>) -> Option<String> {
    cli.map(str::to_string)
        .into_iter()
        .chain(env)
        .chain(file.map(str::to_string))
        .find(|v| !v.trim().is_empty())
}
