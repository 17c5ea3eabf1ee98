use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::asset::AssetBalance;
use crate::utils::valuation;

/// Snapshot of a wallet's balances at fetch time
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSnapshot {
    pub timestamp: DateTime<Utc>,
    pub wallet_address: String,
    pub native: Option<AssetBalance>,
    /// Fungible tokens, non-zero only, sorted by unit price (highest first)
    pub tokens: Vec<AssetBalance>,
    pub total_value_usd: f64,
}

impl PortfolioSnapshot {
    /// Build a snapshot from raw fetch results.
    ///
    /// Zero balances are dropped from `tokens`, the rest are sorted with
    /// [`sort_by_unit_price`] and the aggregate value is computed over the
    /// native coin and every kept token.
    pub fn new(
        wallet_address: impl Into<String>,
        native: Option<AssetBalance>,
        tokens: Vec<AssetBalance>,
    ) -> Self {
        let mut tokens: Vec<AssetBalance> = tokens.into_iter().filter(|t| t.amount > 0).collect();
        sort_by_unit_price(&mut tokens);

        let total_value_usd = valuation::aggregate(native.iter().chain(tokens.iter()));

        Self {
            timestamp: Utc::now(),
            wallet_address: wallet_address.into(),
            native,
            tokens,
            total_value_usd,
        }
    }

    /// All assets in display order: native coin first, then tokens
    pub fn assets(&self) -> impl Iterator<Item = &AssetBalance> {
        self.native.iter().chain(self.tokens.iter())
    }

    /// Get a token by id
    pub fn get_token(&self, id: &str) -> Option<&AssetBalance> {
        self.tokens.iter().find(|t| t.id == id)
    }

    /// Check if snapshot has nothing to display
    pub fn is_empty(&self) -> bool {
        self.native.is_none() && self.tokens.is_empty()
    }

    /// Number of fungible tokens in portfolio
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Stable sort, highest unit price first.
///
/// Unquoted assets rank as price zero; on a tie a quoted asset goes first.
pub fn sort_by_unit_price(tokens: &mut [AssetBalance]) {
    tokens.sort_by(|a, b| {
        let price_a = a.unit_price().unwrap_or(0.0);
        let price_b = b.unit_price().unwrap_or(0.0);
        price_b
            .partial_cmp(&price_a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.price.is_some().cmp(&a.price.is_some()))
    });
}
