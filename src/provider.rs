use std::collections::HashMap;

use lookup_errors::LookupError;
use networking::{Connection, RpcHandler};

use crate::config::ProviderConfig;

/// Hands out a connection per chain.
pub trait ConnectionProvider: Send + Sync {
    type Connection: Connection;

    /// Chain used when a caller does not name one.
    fn default_chain_id(&self) -> u64;
    /// Connection for `chain_id`, or for the default chain if `None`.
    fn get_provider(&self, chain_id: Option<u64>) -> Result<Self::Connection, LookupError>;
}

/// Fixed set of connections keyed by chain id.
#[derive(Debug, Clone)]
pub struct Providers<C> {
    default_chain_id: u64,
    connections: HashMap<u64, C>,
}

impl<C: Connection + Clone> Providers<C> {
    pub fn new(default_chain_id: u64) -> Self {
        Self {
            default_chain_id,
            connections: HashMap::new(),
        }
    }

    /// Register `connection` under its own chain id, replacing any previous one.
    pub fn with_connection(mut self, connection: C) -> Self {
        self.connections.insert(connection.chain_id(), connection);
        self
    }

    pub fn chain_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.connections.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Providers<RpcHandler> {
    pub fn from_config(config: &ProviderConfig) -> Self {
        config
            .networks
            .iter()
            .fold(Self::new(config.default_chain_id), |providers, network| {
                let mut handler = RpcHandler::new(network.url.clone(), network.chain_id)
                    .with_timeout(config.timeout());
                if let Some(registry) = &network.ens_registry {
                    handler = handler.with_ens_registry(registry.clone());
                }
                providers.with_connection(handler)
            })
    }
}

impl<C: Connection + Clone> ConnectionProvider for Providers<C> {
    type Connection = C;

    fn default_chain_id(&self) -> u64 {
        self.default_chain_id
    }

    fn get_provider(&self, chain_id: Option<u64>) -> Result<C, LookupError> {
        let chain_id = chain_id.unwrap_or(self.default_chain_id);
        self.connections
            .get(&chain_id)
            .cloned()
            .ok_or(LookupError::UnsupportedNetwork(chain_id))
    }
}
