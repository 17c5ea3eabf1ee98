//! Balance normalization and USD valuation.

use crate::models::asset::AssetBalance;

/// Display balance and, when a price is known, display value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valuation {
    pub balance: f64,
    /// `None` when the asset has no price quote
    pub value: Option<f64>,
}

/// Convert a raw smallest-unit amount to whole display units
pub fn to_display_balance(raw: u64, decimals: u8) -> f64 {
    raw as f64 / 10f64.powi(decimals as i32)
}

/// Value a raw balance at an optional unit price
pub fn value(raw: u64, decimals: u8, unit_price: Option<f64>) -> Valuation {
    let balance = to_display_balance(raw, decimals);
    Valuation {
        balance,
        value: unit_price.map(|price| balance * price),
    }
}

/// Sum of asset values; unquoted assets count as zero
pub fn aggregate<'a>(assets: impl IntoIterator<Item = &'a AssetBalance>) -> f64 {
    assets.into_iter().map(AssetBalance::value_or_zero).sum()
}
