use serde::{Deserialize, Serialize};

use crate::rpc_handler::RpcError;

pub const JSONRPC_VERSION: &str = "2.0";
pub const BLOCK_TAG_LATEST: &str = "latest";

#[derive(Debug, Deserialize, Serialize)]
pub struct RpcRequest<T> {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: T,
}

impl<T> RpcRequest<T> {
    pub fn new(id: u64, method: &str, params: T) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id,
            method: method.into(),
            params,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RpcResponse<T> {
    pub id: Option<u64>,
    pub result: Option<T>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RpcCallRequest {
    pub to: String,
    pub data: String,
}

pub type RpcCallParams = (RpcCallRequest, String);

impl RpcCallRequest {
    pub fn at_latest(self) -> RpcCallParams {
        (self, BLOCK_TAG_LATEST.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{RpcCallRequest, RpcRequest, RpcResponse};

    #[test]
    fn eth_call_request_should_serialize_as_positional_params() {
        let request = RpcRequest::new(
            7,
            "eth_call",
            RpcCallRequest {
                to: "0x01".into(),
                data: "0x02".into(),
            }
            .at_latest(),
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "eth_call",
                "params": [{"to": "0x01", "data": "0x02"}, "latest"]
            })
        );
    }

    #[test]
    fn error_response_should_deserialize() {
        let resp: RpcResponse<String> = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32601, "message": "method not found"}
        }))
        .unwrap();
        assert!(resp.result.is_none());
        let error = resp.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "method not found");
    }
}
