use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::models::asset::{AssetBalance, PriceQuote};
use crate::traits::asset_provider::AssetProvider;

pub const DEFAULT_HELIUS_URL: &str = "https://mainnet.helius-rpc.com/";

const SEARCH_ASSETS_ID: &str = "helius-test";
const GET_BALANCE_ID: &str = "helius-sol-balance";

#[derive(Debug, Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: &'a str,
    method: &'a str,
    params: P,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

impl<T> RpcResponse<T> {
    fn into_result(self) -> anyhow::Result<T> {
        if let Some(err) = self.error {
            bail!("RPC error {}: {}", err.code, err.message);
        }
        self.result.ok_or_else(|| anyhow!("RPC response has no result"))
    }
}

#[derive(Debug, Deserialize)]
struct SearchAssetsResult {
    items: Vec<AssetItem>,
}

#[derive(Debug, Deserialize)]
struct AssetItem {
    id: String,
    content: AssetContent,
    token_info: Option<TokenInfo>,
}

#[derive(Debug, Deserialize)]
struct AssetContent {
    metadata: AssetMetadata,
    links: Option<AssetLinks>,
}

#[derive(Debug, Deserialize)]
struct AssetMetadata {
    name: String,
    #[serde(default)]
    symbol: String,
}

#[derive(Debug, Deserialize)]
struct AssetLinks {
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    balance: u64,
    decimals: u8,
    price_info: Option<PriceInfo>,
}

#[derive(Debug, Deserialize)]
struct PriceInfo {
    price_per_token: f64,
    currency: String,
}

#[derive(Debug, Deserialize)]
struct BalanceResult {
    value: u64,
}

impl AssetItem {
    /// Items without `token_info` are not token holdings and are skipped
    fn into_balance(self) -> Option<AssetBalance> {
        let token_info = self.token_info?;
        let image = self.content.links.and_then(|links| links.image);
        let price = token_info.price_info.map(|p| PriceQuote {
            price_per_token: p.price_per_token,
            currency: p.currency,
        });

        Some(AssetBalance::new(
            self.id,
            self.content.metadata.name,
            self.content.metadata.symbol,
            image,
            token_info.balance,
            token_info.decimals,
            price,
        ))
    }
}

/// Decode a `searchAssets` response body into asset balances
fn decode_search_assets(body: &[u8]) -> anyhow::Result<Vec<AssetBalance>> {
    let response: RpcResponse<SearchAssetsResult> =
        serde_json::from_slice(body).context("Malformed searchAssets response")?;
    let result = response.into_result()?;

    Ok(result
        .items
        .into_iter()
        .filter_map(AssetItem::into_balance)
        .collect())
}

/// Decode a `getBalance` response body into lamports
fn decode_balance(body: &[u8]) -> anyhow::Result<u64> {
    let response: RpcResponse<BalanceResult> =
        serde_json::from_slice(body).context("Malformed getBalance response")?;
    Ok(response.into_result()?.value)
}

/// Helius DAS / JSON-RPC backed asset provider
pub struct HeliusAssetProvider {
    client: Client,
    rpc_url: String,
    api_key: String,
}

impl HeliusAssetProvider {
    /// Create a new Helius provider
    pub fn new(rpc_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), rpc_url, api_key)
    }

    /// Create a provider sharing an existing HTTP client
    pub fn with_client(client: Client, rpc_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            rpc_url: rpc_url.into(),
            api_key: api_key.into(),
        }
    }

    async fn call<P>(&self, id: &str, method: &str, params: P) -> anyhow::Result<Vec<u8>>
    where
        P: Serialize + Send + Sync,
    {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        let response = self
            .client
            .post(&self.rpc_url)
            .query(&[("api-key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .with_context(|| format!("{} request failed", method))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            bail!("Helius {} error {}: {}", method, status, text);
        }

        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read {} response", method))?;
        debug!("{} returned {} bytes", method, body.len());
        Ok(body.to_vec())
    }
}

#[async_trait]
impl AssetProvider for HeliusAssetProvider {
    async fn fetch_fungible_assets(&self, owner: &str) -> anyhow::Result<Vec<AssetBalance>> {
        let params = json!({
            "ownerAddress": owner,
            "tokenType": "fungible",
        });
        let body = self.call(SEARCH_ASSETS_ID, "searchAssets", params).await?;
        let assets = decode_search_assets(&body)?;

        info!("Found {} fungible assets for {}", assets.len(), owner);
        Ok(assets)
    }

    async fn fetch_native_balance(&self, owner: &str) -> anyhow::Result<u64> {
        let body = self.call(GET_BALANCE_ID, "getBalance", [owner]).await?;
        decode_balance(&body)
    }
}
