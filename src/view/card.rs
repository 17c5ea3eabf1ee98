use futures_util::future::join_all;
use reqwest::Url;

use crate::models::{asset::AssetBalance, portfolio::PortfolioSnapshot};
use crate::traits::renderer::IconProbe;
use crate::utils::format::{format_balance, format_usd};

/// Shown in place of icons that are missing or fail to load
pub const PLACEHOLDER_ICON_URL: &str = "https://via.placeholder.com/64?text=?";

/// One rendered balance row
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceCard {
    pub id: String,
    pub icon: String,
    pub name: String,
    pub symbol: String,
    pub balance: String,
    /// Absent when the asset has no price quote
    pub value: Option<String>,
}

impl BalanceCard {
    /// Build a card; `icon_loads` is the result of probing the icon, if any
    pub fn from_asset(asset: &AssetBalance, icon_loads: bool) -> Self {
        let valuation = asset.valuation();
        let icon = match asset.image.as_deref() {
            Some(url) if icon_loads && Url::parse(url).is_ok() => url.to_string(),
            _ => PLACEHOLDER_ICON_URL.to_string(),
        };

        Self {
            id: asset.id.clone(),
            icon,
            name: asset.name.clone(),
            symbol: asset.symbol.clone(),
            balance: format_balance(valuation.balance),
            value: valuation.value.map(format_usd),
        }
    }

    pub fn has_placeholder_icon(&self) -> bool {
        self.icon == PLACEHOLDER_ICON_URL
    }
}

/// Build the cards of a snapshot, probing every icon concurrently
pub async fn build_cards(snapshot: &PortfolioSnapshot, probe: &dyn IconProbe) -> Vec<BalanceCard> {
    let probes = snapshot.assets().map(|asset| async move {
        let loads = match asset.image.as_deref() {
            Some(url) if Url::parse(url).is_ok() => probe.is_loadable(url).await,
            _ => false,
        };
        BalanceCard::from_asset(asset, loads)
    });

    join_all(probes).await
}
