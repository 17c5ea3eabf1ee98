use tracing::level_filters::LevelFilter;

use crate::providers::coingecko_provider::DEFAULT_COINGECKO_URL;
use crate::providers::helius_provider::DEFAULT_HELIUS_URL;

#[derive(clap::Parser, Debug, Clone)]
#[command(name = "solana-balance-viewer", about = "Show token balances and USD value of a Solana wallet")]
pub struct Config {
    /// Helius API key
    #[clap(long, env = "HELIUS_API_KEY", hide_env_values = true)]
    pub helius_api_key: String,

    #[clap(long, default_value = DEFAULT_HELIUS_URL)]
    pub helius_url: String,

    #[clap(long, default_value = DEFAULT_COINGECKO_URL)]
    pub coingecko_url: String,

    /// Wallet to show; prompts for addresses when omitted
    #[clap(long)]
    pub address: Option<String>,

    /// Check that token icons load, falling back to a placeholder otherwise
    #[clap(long)]
    pub probe_icons: bool,

    #[clap(long, default_value = "info")]
    pub log_level: LevelFilter,
}
