use std::time::Duration;

mod block_explorers;
mod chains;

pub use block_explorers::*;
pub use chains::*;

pub const DEFAULT_CHAIN_ID: u64 = 1;
pub const ENS_REGISTRY: &str = "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e";
pub const REVERSE_SUFFIX: &str = "addr.reverse";
pub const RPC_TIMEOUT: Duration = Duration::from_secs(5);
