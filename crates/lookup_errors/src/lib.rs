use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupError {
    #[error("No connection configured for chain `{0}`")]
    UnsupportedNetwork(u64),
    #[error("The network `{0}` does not support ENS")]
    EnsUnsupported(u64),
    #[error("Invalid address `{0}`")]
    InvalidAddress(String),
    #[error("Rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("Rpc transport failed: {0}")]
    Transport(String),
    #[error("Malformed rpc response: {0}")]
    InvalidResponse(String),
}

impl LookupError {
    /// Whether the node could not be reached or answered without a JSON-RPC
    /// error object, e.g. a bare HTTP error status.
    pub fn is_transport(&self) -> bool {
        matches!(self, LookupError::Transport(_))
    }
}
