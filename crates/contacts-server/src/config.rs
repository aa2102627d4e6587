//! Server configuration
//!
//! Read once at startup from Shuttle secrets (`Secrets.toml` locally).

use shuttle_runtime::SecretStore;

const API_KEY: &str = "CONTACTS_API_KEY";
const SEED_CONTACTS: &str = "SEED_CONTACTS";
const STORE: &str = "CONTACTS_STORE";

/// Where contacts are persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreBackend {
    #[default]
    Postgres,
    /// Process memory; contents are lost on restart
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "pg" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(format!("Unknown store backend: {}", s)),
        }
    }
}

/// Runtime settings for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bearer token required on contact routes; `None` disables auth
    pub api_key: Option<String>,
    /// Insert sample contacts when the store is empty
    pub seed_contacts: bool,
    pub store: StoreBackend,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            seed_contacts: true,
            store: StoreBackend::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_secrets(secrets: &SecretStore) -> Result<Self, String> {
        Self::from_lookup(|key| secrets.get(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let defaults = Self::default();

        Ok(Self {
            api_key: lookup(API_KEY).filter(|key| !key.is_empty()),
            seed_contacts: lookup(SEED_CONTACTS)
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_contacts),
            store: match lookup(STORE) {
                Some(value) => value.parse()?,
                None => defaults.store,
            },
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert!(config.api_key.is_none());
        assert!(config.seed_contacts);
        assert_eq!(config.store, StoreBackend::Postgres);
    }

    #[test]
    fn test_empty_api_key_disables_auth() {
        let config = config_from(&[("CONTACTS_API_KEY", "")]);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_seed_flag() {
        assert!(!config_from(&[("SEED_CONTACTS", "false")]).seed_contacts);
        assert!(!config_from(&[("SEED_CONTACTS", " OFF ")]).seed_contacts);
        assert!(config_from(&[("SEED_CONTACTS", "true")]).seed_contacts);
    }

    #[test]
    fn test_api_key() {
        let config = config_from(&[("CONTACTS_API_KEY", "secret")]);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_store_backend() {
        assert_eq!(
            config_from(&[("CONTACTS_STORE", "memory")]).store,
            StoreBackend::Memory
        );

        let lookup = |key: &str| (key == "CONTACTS_STORE").then(|| "sqlite".to_string());
        let err = ServerConfig::from_lookup(lookup).unwrap_err();
        assert_eq!(err, "Unknown store backend: sqlite");
    }
}
