use crate::ENS_REGISTRY;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Chain {
    Mainnet,
    Ropsten,
    Rinkeby,
    Goerli,
    Kovan,
    Sepolia,
    Optimism,
    OptimismKovan,
    Polygon,
    PolygonMumbai,
    Arbitrum,
    ArbitrumRinkeby,
    ArbitrumGoerli,
    Klaytn,
    KlaytnBaobab,
}

impl Chain {
    pub const ALL: [Chain; 15] = [
        Chain::Mainnet,
        Chain::Ropsten,
        Chain::Rinkeby,
        Chain::Goerli,
        Chain::Kovan,
        Chain::Sepolia,
        Chain::Optimism,
        Chain::OptimismKovan,
        Chain::Polygon,
        Chain::PolygonMumbai,
        Chain::Arbitrum,
        Chain::ArbitrumRinkeby,
        Chain::ArbitrumGoerli,
        Chain::Klaytn,
        Chain::KlaytnBaobab,
    ];

    /// The EIP-155 chain id.
    pub const fn id(&self) -> u64 {
        match self {
            Chain::Mainnet => 1,
            Chain::Ropsten => 3,
            Chain::Rinkeby => 4,
            Chain::Goerli => 5,
            Chain::Kovan => 42,
            Chain::Sepolia => 11_155_111,
            Chain::Optimism => 10,
            Chain::OptimismKovan => 69,
            Chain::Polygon => 137,
            Chain::PolygonMumbai => 80_001,
            Chain::Arbitrum => 42_161,
            Chain::ArbitrumRinkeby => 421_611,
            Chain::ArbitrumGoerli => 421_613,
            Chain::Klaytn => 8_217,
            Chain::KlaytnBaobab => 1_001,
        }
    }

    /// The network tag used to key per-network tables.
    pub const fn name(&self) -> &'static str {
        match self {
            Chain::Mainnet => "mainnet",
            Chain::Ropsten => "ropsten",
            Chain::Rinkeby => "rinkeby",
            Chain::Goerli => "goerli",
            Chain::Kovan => "kovan",
            Chain::Sepolia => "sepolia",
            Chain::Optimism => "optimism",
            Chain::OptimismKovan => "optimismKovan",
            Chain::Polygon => "polygon",
            Chain::PolygonMumbai => "polygonMumbai",
            Chain::Arbitrum => "arbitrum",
            Chain::ArbitrumRinkeby => "arbitrumRinkeby",
            Chain::ArbitrumGoerli => "arbitrumGoerli",
            Chain::Klaytn => "klaytn",
            Chain::KlaytnBaobab => "klaytnBaobab",
        }
    }

    /// The ENS registry deployed on this chain, if any.
    pub const fn ens_registry(&self) -> Option<&'static str> {
        match self {
            Chain::Mainnet | Chain::Ropsten | Chain::Rinkeby | Chain::Goerli | Chain::Sepolia => {
                Some(ENS_REGISTRY)
            }
            _ => None,
        }
    }

    pub fn from_id(id: u64) -> Option<Chain> {
        Chain::ALL.into_iter().find(|chain| chain.id() == id)
    }

    pub fn from_name(name: &str) -> Option<Chain> {
        Chain::ALL.into_iter().find(|chain| chain.name() == name)
    }
}
