use std::{
    fmt::Debug,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use alloy_primitives::{Address as EvmAddress, B256};
use constants::{Chain, RPC_TIMEOUT};
use lookup_errors::LookupError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;
use ureq::{Agent, AgentBuilder, Error, Response};

use crate::{
    ens::{
        decode_addr, decode_name, decode_resolver, encode_call, namehash, normalize,
        parse_address, reverse_node, EnsRegistry, EnsResolver,
    },
    rpc_abi::{RpcCallRequest, RpcRequest, RpcResponse},
    Address, Connection,
};

/// JSON-RPC client for one chain.
///
/// Requests run on tokio's blocking pool, so every async method must be
/// polled from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct RpcHandler {
    pub endpoint: String,
    pub chain_id: u64,
    pub ens_registry: Option<String>,
    pub agent: Agent,
    next_id: Arc<AtomicU64>,
}

fn build_agent(timeout: Duration) -> Agent {
    AgentBuilder::new()
        .timeout_read(timeout)
        .timeout_write(timeout)
        .build()
}

impl RpcHandler {
    pub fn new(endpoint: String, chain_id: u64) -> Self {
        Self {
            endpoint,
            chain_id,
            ens_registry: Chain::from_id(chain_id)
                .and_then(|chain| chain.ens_registry())
                .map(String::from),
            agent: build_agent(RPC_TIMEOUT),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = build_agent(timeout);
        self
    }

    /// Use a registry other than the well-known deployment, e.g. on a dev chain.
    pub fn with_ens_registry(mut self, registry: String) -> Self {
        self.ens_registry = Some(registry);
        self
    }

    pub async fn request<P, R>(&self, method: &str, params: P) -> Result<R, LookupError>
    where
        P: Serialize + Debug + Send + 'static,
        R: DeserializeOwned + Debug + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);
        debug!("Rpc request to {}: {:?}", self.endpoint, request);
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        tokio::task::spawn_blocking(move || {
            handle_response::<R>(agent.post(&endpoint).send_json(&request))
        })
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?
    }

    pub async fn eth_call(&self, to: &str, data: String) -> Result<String, LookupError> {
        let call = RpcCallRequest {
            to: to.to_string(),
            data,
        };
        self.request("eth_call", call.at_latest()).await
    }

    pub async fn get_chain_id(&self) -> Result<u64, LookupError> {
        let id: String = self.request("eth_chainId", Vec::<Value>::new()).await?;
        parse_quantity(&id)
    }

    fn registry(&self) -> Result<&str, LookupError> {
        self.ens_registry
            .as_deref()
            .ok_or(LookupError::EnsUnsupported(self.chain_id))
    }

    /// Resolver contract responsible for `node`, `None` when unset.
    pub async fn get_resolver(&self, node: B256) -> Result<Option<EvmAddress>, LookupError> {
        let registry = self.registry()?;
        let data = self
            .eth_call(registry, encode_call(&EnsRegistry::resolverCall { node }))
            .await?;
        decode_resolver(&data)
    }
}

#[async_trait::async_trait]
impl Connection for RpcHandler {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn lookup_address(&self, address: &Address) -> Result<Option<String>, LookupError> {
        self.registry()?;
        let account = parse_address(address)?;
        let node = reverse_node(&account);
        let resolver = match self.get_resolver(node).await? {
            Some(resolver) => resolver,
            None => {
                debug!("No reverse resolver set for {}", address);
                return Ok(None);
            }
        };
        let data = self
            .eth_call(
                &resolver.to_string(),
                encode_call(&EnsResolver::nameCall { node }),
            )
            .await?;
        let name = match decode_name(&data)? {
            Some(name) => name,
            None => return Ok(None),
        };

        // A reverse record only counts if the name points back at the address.
        let forward = namehash(&normalize(&name));
        let forward_resolver = match self.get_resolver(forward).await? {
            Some(resolver) => resolver,
            None => {
                debug!("Reverse record {} has no forward resolver", name);
                return Ok(None);
            }
        };
        let data = self
            .eth_call(
                &forward_resolver.to_string(),
                encode_call(&EnsResolver::addrCall { node: forward }),
            )
            .await?;
        match decode_addr(&data)? {
            Some(resolved) if resolved == account => Ok(Some(name)),
            _ => {
                debug!("Reverse record {} does not resolve back to {}", name, address);
                Ok(None)
            }
        }
    }
}

/// Parse a `0x`-prefixed hex quantity.
pub fn parse_quantity(value: &str) -> Result<u64, LookupError> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| LookupError::InvalidResponse(format!("not a hex quantity: {}", value)))?;
    u64::from_str_radix(digits, 16).map_err(|e| LookupError::InvalidResponse(e.to_string()))
}

pub fn handle_response<S: Debug + DeserializeOwned>(
    resp: Result<Response, Error>,
) -> Result<S, LookupError> {
    let res: Result<S, LookupError> = match resp {
        Ok(response) => match response.into_json::<RpcResponse<S>>() {
            Ok(RpcResponse {
                error: Some(error), ..
            }) => Err(error.into()),
            Ok(RpcResponse {
                result: Some(result),
                ..
            }) => Ok(result),
            Ok(_) => Err(LookupError::InvalidResponse(
                "response carries neither result nor error".into(),
            )),
            Err(e) => Err(LookupError::InvalidResponse(e.to_string())),
        },
        Err(ureq::Error::Status(code, response)) => {
            match response.into_json::<RpcResponse<Value>>() {
                Ok(RpcResponse {
                    error: Some(error), ..
                }) => Err(error.into()),
                _ => Err(LookupError::Transport(format!("http status {}", code))),
            }
        }
        Err(e) => Err(LookupError::Transport(e.to_string())),
    };
    debug!("Handle rpc response: {:?}", res);
    res
}

#[cfg(test)]
mod tests {
    use lookup_errors::LookupError;

    use ureq::Response;

    use super::{handle_response, parse_quantity, RpcHandler};
    use crate::{Address, Connection};

    #[test]
    fn known_chains_should_pick_up_ens_registry() {
        let mainnet = RpcHandler::new("http://127.0.0.1:8545".into(), 1);
        assert_eq!(
            mainnet.ens_registry.as_deref(),
            Some(constants::ENS_REGISTRY)
        );
        let polygon = RpcHandler::new("http://127.0.0.1:8545".into(), 137);
        assert!(polygon.ens_registry.is_none());
        let devnet = RpcHandler::new("http://127.0.0.1:8545".into(), 31337)
            .with_ens_registry("0x5FbDB2315678afecb367f032d93F642f64180aa3".into());
        assert!(devnet.ens_registry.is_some());
    }

    #[tokio::test]
    async fn lookup_without_registry_should_fail_before_any_call() {
        // nothing listens here, so reaching the network would be a transport error
        let polygon = RpcHandler::new("http://127.0.0.1:1".into(), 137);
        let result = polygon
            .lookup_address(&Address::from("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"))
            .await;
        assert_eq!(result, Err(LookupError::EnsUnsupported(137)));
    }

    #[tokio::test]
    async fn malformed_address_should_fail_before_any_call() {
        let mainnet = RpcHandler::new("http://127.0.0.1:1".into(), 1);
        let result = mainnet.lookup_address(&Address::from("0x1234")).await;
        assert_eq!(result, Err(LookupError::InvalidAddress("0x1234".into())));
    }

    #[tokio::test]
    async fn unreachable_node_should_be_a_transport_error() {
        let mainnet = RpcHandler::new("http://127.0.0.1:1".into(), 1);
        let result = mainnet
            .lookup_address(&Address::from("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"))
            .await;
        assert!(result.unwrap_err().is_transport());
    }

    #[test]
    fn quantity_should_need_exactly_one_prefix() {
        assert_eq!(parse_quantity("0x1"), Ok(1));
        assert_eq!(parse_quantity("0xaa36a7"), Ok(11_155_111));
        assert!(parse_quantity("0x0x1").is_err());
        assert!(parse_quantity("1").is_err());
        assert!(parse_quantity("0x").is_err());
    }

    #[test]
    fn http_status_without_rpc_error_should_be_transport() {
        let resp = Response::new(502, "Bad Gateway", "upstream down").unwrap();
        let result = handle_response::<String>(Err(ureq::Error::Status(502, resp)));
        assert_eq!(result, Err(LookupError::Transport("http status 502".into())));
        assert!(result.unwrap_err().is_transport());
    }

    #[test]
    fn http_status_with_rpc_error_should_keep_the_rpc_error() {
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32005,"message":"rate limited"}}"#;
        let resp = Response::new(429, "Too Many Requests", body).unwrap();
        let result = handle_response::<String>(Err(ureq::Error::Status(429, resp)));
        assert_eq!(
            result,
            Err(LookupError::Rpc {
                code: -32005,
                message: "rate limited".into()
            })
        );
    }
}
