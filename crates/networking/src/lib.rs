pub mod ens;
pub mod rpc_abi;
pub mod rpc_handler;

use std::fmt;

use lookup_errors::LookupError;
use serde::{Deserialize, Serialize};

pub use rpc_handler::RpcHandler;
pub use ureq;

/// An account address as handed in by the caller.
///
/// No validation happens on construction; whichever [`Connection`] consumes
/// the address decides what a malformed one means.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Address {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[async_trait::async_trait]
pub trait Connection: Send + Sync {
    /// The chain this connection talks to.
    fn chain_id(&self) -> u64;
    /// Look up the primary name registered for `address`, `None` if there is none.
    async fn lookup_address(&self, address: &Address) -> Result<Option<String>, LookupError>;
}
