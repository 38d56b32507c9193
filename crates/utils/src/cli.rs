use clap::Parser;

#[derive(Parser, Debug, Clone)]
pub struct Lookup {
    /// The account address to look up.
    #[clap(short, long)]
    pub address: String,
    /// The chain to query, the config default is used if omitted.
    #[clap(long)]
    pub chain_id: Option<u64>,
    /// Specify the path to the providers config file.
    #[clap(long)]
    pub config: String,
    /// Specify the verbosity of the tool [options: 0, 1, 2].
    #[clap(short, long, default_value = "0")]
    pub verbosity: u8,
}
