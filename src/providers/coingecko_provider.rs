use std::collections::HashMap;

use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::traits::price_provider::PriceProvider;

pub const DEFAULT_COINGECKO_URL: &str = "https://api.coingecko.com/api/v3";

const SOLANA_COIN_ID: &str = "solana";
const VS_CURRENCY: &str = "usd";

/// `/simple/price` response: coin id -> currency -> price
type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

/// Pull the SOL/USD price out of a `/simple/price` body
fn decode_sol_price(body: &[u8]) -> anyhow::Result<f64> {
    let prices: SimplePriceResponse =
        serde_json::from_slice(body).context("Malformed simple/price response")?;

    prices
        .get(SOLANA_COIN_ID)
        .and_then(|quotes| quotes.get(VS_CURRENCY))
        .copied()
        .ok_or_else(|| anyhow!("No {}/{} quote in price response", SOLANA_COIN_ID, VS_CURRENCY))
}

/// CoinGecko spot price provider
pub struct CoinGeckoPriceProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoPriceProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoPriceProvider {
    async fn get_sol_price(&self) -> anyhow::Result<f64> {
        let url = format!("{}/simple/price", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .query(&[("ids", SOLANA_COIN_ID), ("vs_currencies", VS_CURRENCY)])
            .send()
            .await
            .context("Price request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            bail!("CoinGecko API error {}: {}", status, error_text);
        }

        let body = response.bytes().await.context("Failed to read price response")?;
        let price = decode_sol_price(&body)?;

        debug!("SOL price: ${}", price);
        Ok(price)
    }
}
