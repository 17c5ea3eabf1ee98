use async_trait::async_trait;

/// Trait for price feed providers
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Get the SOL spot price in USD
    async fn get_sol_price(&self) -> anyhow::Result<f64>;
}
