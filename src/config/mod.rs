use anyhow::anyhow;
use anyhow::Result;
use constants::{DEFAULT_CHAIN_ID, RPC_TIMEOUT};
use serde::{Deserialize, Serialize};
use tracing::info;

use std::{fs, path::Path, time::Duration};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_chain_id")]
    pub default_chain_id: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub networks: Vec<NetworkConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub url: String,
    #[serde(default)]
    pub ens_registry: Option<String>,
}

fn default_chain_id() -> u64 {
    DEFAULT_CHAIN_ID
}

fn default_timeout_secs() -> u64 {
    RPC_TIMEOUT.as_secs()
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ProviderConfig {
    pub fn load(filename: impl AsRef<Path>) -> Result<Self> {
        let config = fs::read_to_string(filename.as_ref())
            .map_err(|_| anyhow!("Failed to read provider config"))?;
        info!("Provider config: {:?}", config);
        serde_yaml::from_str(&config).map_err(|_| anyhow!("Failed to parse provider config"))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{NetworkConfig, ProviderConfig};

    #[test]
    fn provider_config_should_be_loaded() {
        let config = ProviderConfig::load("./fixtures/providers.yml").unwrap();
        assert_eq!(config.default_chain_id, 1);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.networks.len(), 3);
        assert_eq!(
            config.networks.last(),
            Some(&NetworkConfig {
                chain_id: 31337,
                url: "http://127.0.0.1:8546".to_string(),
                ens_registry: Some("0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string()),
            })
        );
        assert_eq!(config.networks[1].chain_id, 5);
        assert_eq!(config.networks[1].ens_registry, None);
    }

    #[test]
    fn minimal_config_should_use_defaults() {
        let config = ProviderConfig::load("./fixtures/providers-minimal.yml").unwrap();
        assert_eq!(
            config,
            ProviderConfig {
                default_chain_id: 1,
                timeout_secs: 5,
                networks: vec![NetworkConfig {
                    chain_id: 1,
                    url: "http://127.0.0.1:8545".to_string(),
                    ens_registry: None,
                }],
            }
        );
    }

    #[test]
    fn missing_config_should_fail() {
        assert!(ProviderConfig::load("./fixtures/nope.yml").is_err());
    }
}
