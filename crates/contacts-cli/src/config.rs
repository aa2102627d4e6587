//! Configuration management for the Contacts CLI
//!
//! Stores API key and base URL in ~/.config/contacts/config.toml.
//! `CONTACTS_BASE_URL` and `CONTACTS_API_KEY` (environment or `.env`)
//! override the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "contacts";
const CONFIG_FILE: &str = "config.toml";

const ENV_BASE_URL: &str = "CONTACTS_BASE_URL";
const ENV_API_KEY: &str = "CONTACTS_API_KEY";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file (or defaults), then apply environment overrides
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            Self::parse(&content)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            self.base_url = base_url;
        }
        if let Some(api_key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            self.api_key = Some(api_key);
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fills_default_base_url() {
        let config = Config::parse("api_key = \"k\"").unwrap();
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config {
            api_key: None,
            base_url: "https://contacts.example".to_string(),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(!text.contains("api_key"));
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "CONTACTS_BASE_URL" => Some("http://elsewhere:9000".to_string()),
            "CONTACTS_API_KEY" => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.base_url, "http://elsewhere:9000");
        assert!(config.api_key.is_none());
    }
}
