use async_trait::async_trait;

use crate::models::asset::AssetBalance;

/// Source of wallet holdings
#[async_trait]
pub trait AssetProvider: Send + Sync {
    /// Fetch the fungible assets owned by a wallet, as reported by the indexer.
    ///
    /// Zero balances may be included; the snapshot filters them.
    async fn fetch_fungible_assets(&self, owner: &str) -> anyhow::Result<Vec<AssetBalance>>;

    /// Fetch the native balance in lamports
    async fn fetch_native_balance(&self, owner: &str) -> anyhow::Result<u64>;
}
