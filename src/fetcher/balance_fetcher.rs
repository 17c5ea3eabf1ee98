use std::sync::Arc;
use std::time::Instant;

use reqwest::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{FetchError, IntoFetchError};
use crate::models::{asset::AssetBalance, portfolio::PortfolioSnapshot};
use crate::providers::{CoinGeckoPriceProvider, HeliusAssetProvider};
use crate::traits::{asset_provider::AssetProvider, price_provider::PriceProvider};

/// Fetches and values every balance of a wallet
#[derive(Clone)]
pub struct BalanceFetcher {
    asset_provider: Arc<dyn AssetProvider>,
    price_provider: Arc<dyn PriceProvider>,
}

impl BalanceFetcher {
    /// Create a new balance fetcher
    pub fn new(asset_provider: Arc<dyn AssetProvider>, price_provider: Arc<dyn PriceProvider>) -> Self {
        Self {
            asset_provider,
            price_provider,
        }
    }

    /// Build the Helius + CoinGecko fetcher described by `config`
    pub fn from_config(config: &Config) -> Self {
        let client = Client::new();
        let asset_provider = HeliusAssetProvider::with_client(
            client.clone(),
            config.helius_url.clone(),
            config.helius_api_key.clone(),
        );
        let price_provider = CoinGeckoPriceProvider::with_client(client, config.coingecko_url.clone());

        Self::new(Arc::new(asset_provider), Arc::new(price_provider))
    }

    /// Fetch assets, native balance and SOL price concurrently and build a snapshot.
    ///
    /// Any failed request fails the whole fetch; partial results are dropped.
    pub async fn fetch(&self, address: &str) -> Result<PortfolioSnapshot, FetchError> {
        let start_time = Instant::now();
        debug!("Fetching balances for {}", address);

        let (tokens, lamports, sol_price) = self.fetch_all(address).await.into_fetch_error()?;

        let native = AssetBalance::native(lamports, Some(sol_price));
        let snapshot = PortfolioSnapshot::new(address, Some(native), tokens);

        info!(
            "Fetched {} tokens for {}, total ${:.2} in {:?}",
            snapshot.token_count(),
            address,
            snapshot.total_value_usd,
            start_time.elapsed()
        );
        Ok(snapshot)
    }

    async fn fetch_all(&self, address: &str) -> anyhow::Result<(Vec<AssetBalance>, u64, f64)> {
        tokio::try_join!(
            self.asset_provider.fetch_fungible_assets(address),
            self.asset_provider.fetch_native_balance(address),
            self.price_provider.get_sol_price(),
        )
    }
}
