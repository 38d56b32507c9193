pub mod config;
mod provider;

pub use constants::{
    block_explorer, etherscan_block_explorer, BlockExplorer, BlockExplorerName, Chain,
};
pub use lookup_errors::LookupError;
pub use networking::{Address, Connection, RpcHandler};
pub use provider::*;

/// Arguments of [`fetch_ens_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchEnsNameArgs {
    /// Address to look up.
    pub address: Address,
    /// Chain to query, the provider's default chain when `None`.
    pub chain_id: Option<u64>,
}

impl FetchEnsNameArgs {
    pub fn new(address: impl Into<Address>) -> Self {
        Self {
            address: address.into(),
            chain_id: None,
        }
    }

    pub fn on_chain(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }
}

/// The primary name of an address, `None` if it has none.
pub type FetchEnsNameResult = Option<String>;

/// Reverse-resolve `args.address` on the requested chain.
///
/// Errors from the provider or the connection are passed through untouched.
pub async fn fetch_ens_name<P: ConnectionProvider>(
    provider: &P,
    args: FetchEnsNameArgs,
) -> Result<FetchEnsNameResult, LookupError> {
    let FetchEnsNameArgs { address, chain_id } = args;
    let connection = provider.get_provider(chain_id)?;
    connection.lookup_address(&address).await
}
