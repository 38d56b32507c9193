use anyhow::Result;
use ens_lookup::{
    config::ProviderConfig, etherscan_block_explorer, fetch_ens_name, Chain, ConnectionProvider,
    FetchEnsNameArgs, Providers,
};
use tracing::info;
use utils::{initialize_logger, initialize_logger_filter, EnvFilter, Lookup, Parser};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Lookup::parse();
    let Lookup {
        address,
        chain_id,
        config,
        verbosity,
    } = args;
    initialize_logger(verbosity);
    let filter = EnvFilter::from_default_env()
        .add_directive("ureq=off".parse()?)
        .add_directive("rustls=off".parse()?);
    initialize_logger_filter(filter);

    let config = ProviderConfig::load(config)?;
    let providers = Providers::from_config(&config);
    info!("Configured chains: {:?}", providers.chain_ids());
    let chain_id = chain_id.unwrap_or(providers.default_chain_id());
    info!("Looking up {} on chain {}", address, chain_id);

    let args = FetchEnsNameArgs::new(address.as_str()).on_chain(chain_id);
    match fetch_ens_name(&providers, args).await? {
        Some(name) => println!("{}", name),
        None => println!("No name registered for {}", address),
    }
    if let Some(chain) = Chain::from_id(chain_id) {
        let explorer = etherscan_block_explorer(chain);
        println!("{}: {}", explorer.name, explorer.address_url(&address));
    }
    Ok(())
}
