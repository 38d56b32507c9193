use std::str::FromStr;

use alloy_primitives::{keccak256, Address as EvmAddress, B256};
use alloy_sol_types::{sol, SolCall};
use constants::REVERSE_SUFFIX;
use lookup_errors::LookupError;

use crate::Address;

sol! {
    interface EnsRegistry {
        function resolver(bytes32 node) external view returns (address);
    }

    interface EnsResolver {
        function name(bytes32 node) external view returns (string);
        function addr(bytes32 node) external view returns (address);
    }
}

/// Case-folded form of `name`; the part of ENS normalization applied before hashing.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
}

/// EIP-137 namehash of `name` as given.
pub fn namehash(name: &str) -> B256 {
    let mut node = B256::ZERO;
    if name.is_empty() {
        return node;
    }
    for label in name.rsplit('.') {
        node = keccak256([node.as_slice(), keccak256(label.as_bytes()).as_slice()].concat());
    }
    node
}

pub fn parse_address(address: &Address) -> Result<EvmAddress, LookupError> {
    EvmAddress::from_str(address.as_str())
        .map_err(|_| LookupError::InvalidAddress(address.to_string()))
}

/// Node of `<hex address>.addr.reverse`, the key reverse records live under.
pub fn reverse_node(account: &EvmAddress) -> B256 {
    namehash(&format!(
        "{}.{}",
        hex::encode(account.as_slice()),
        REVERSE_SUFFIX
    ))
}

pub fn encode_call<C: SolCall>(call: &C) -> String {
    format!("0x{}", hex::encode(call.abi_encode()))
}

/// Resolver set for a node on the registry. The zero address and an empty
/// return both mean "nothing there".
pub fn decode_resolver(data: &str) -> Result<Option<EvmAddress>, LookupError> {
    let resolver = decode_returns::<EnsRegistry::resolverCall>(data)?.map(|ret| ret._0);
    Ok(resolver.filter(|address| *address != EvmAddress::ZERO))
}

pub fn decode_addr(data: &str) -> Result<Option<EvmAddress>, LookupError> {
    let address = decode_returns::<EnsResolver::addrCall>(data)?.map(|ret| ret._0);
    Ok(address.filter(|address| *address != EvmAddress::ZERO))
}

/// Reverse record name; an empty string is `None`.
pub fn decode_name(data: &str) -> Result<Option<String>, LookupError> {
    let name = decode_returns::<EnsResolver::nameCall>(data)?.map(|ret| ret._0);
    Ok(name.filter(|name| !name.is_empty()))
}

fn decode_returns<C: SolCall>(data: &str) -> Result<Option<C::Return>, LookupError> {
    let bytes = hex::decode(data.strip_prefix("0x").unwrap_or(data))
        .map_err(|e| LookupError::InvalidResponse(e.to_string()))?;
    if bytes.is_empty() {
        return Ok(None);
    }
    C::abi_decode_returns(&bytes, true)
        .map(Some)
        .map_err(|e| LookupError::InvalidResponse(e.to_string()))
}
