use lookup_errors::LookupError;
use serde::{Deserialize, Serialize};

mod handler;

pub use handler::*;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl From<RpcError> for LookupError {
    fn from(value: RpcError) -> Self {
        LookupError::Rpc {
            code: value.code,
            message: value.message,
        }
    }
}
