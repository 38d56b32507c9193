use crate::Chain;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockExplorerName {
    Etherscan,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockExplorer {
    pub name: &'static str,
    pub url: &'static str,
}

impl BlockExplorer {
    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.url, address)
    }
}

const fn explorer(name: &'static str, url: &'static str) -> BlockExplorer {
    BlockExplorer { name, url }
}

/// Etherscan-family explorer for every known chain.
pub const fn etherscan_block_explorer(chain: Chain) -> BlockExplorer {
    match chain {
        Chain::Mainnet => explorer("Etherscan", "https://etherscan.io"),
        Chain::Ropsten => explorer("Etherscan", "https://ropsten.etherscan.io"),
        Chain::Rinkeby => explorer("Etherscan", "https://rinkeby.etherscan.io"),
        Chain::Goerli => explorer("Etherscan", "https://goerli.etherscan.io"),
        Chain::Kovan => explorer("Etherscan", "https://kovan.etherscan.io"),
        Chain::Sepolia => explorer("Etherscan", "https://sepolia.etherscan.io"),
        Chain::Optimism => explorer("Etherscan", "https://optimistic.etherscan.io"),
        Chain::OptimismKovan => explorer("Etherscan", "https://kovan-optimistic.etherscan.io"),
        Chain::Polygon => explorer("PolygonScan", "https://polygonscan.com"),
        Chain::PolygonMumbai => explorer("PolygonScan", "https://mumbai.polygonscan.com"),
        Chain::Arbitrum => explorer("Arbiscan", "https://arbiscan.io"),
        Chain::ArbitrumRinkeby => explorer("Arbiscan", "https://testnet.arbiscan.io"),
        Chain::ArbitrumGoerli => explorer("Arbiscan", "https://goerli.arbiscan.io"),
        Chain::Klaytn => explorer("Klaytnfinder", "https://www.klaytnfinder.io"),
        Chain::KlaytnBaobab => explorer("Klaytnfinder", "https://www.klaytnfinder.io"),
    }
}

pub fn block_explorer(name: BlockExplorerName, chain: Chain) -> BlockExplorer {
    match name {
        BlockExplorerName::Etherscan => etherscan_block_explorer(chain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_explorer_should_be_etherscan() {
        let explorer = block_explorer(BlockExplorerName::Etherscan, Chain::Mainnet);
        assert_eq!(explorer.name, "Etherscan");
        assert_eq!(explorer.url, "https://etherscan.io");
        assert_eq!(
            explorer.address_url("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"),
            "https://etherscan.io/address/0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"
        );
    }

    #[test]
    fn every_chain_should_have_an_https_explorer() {
        for chain in Chain::ALL {
            let explorer = etherscan_block_explorer(chain);
            assert!(explorer.url.starts_with("https://"), "{:?}", chain);
            assert!(!explorer.url.ends_with('/'));
        }
        assert_eq!(etherscan_block_explorer(Chain::Polygon).name, "PolygonScan");
        assert_eq!(
            etherscan_block_explorer(Chain::ArbitrumGoerli).url,
            "https://goerli.arbiscan.io"
        );
    }
}
