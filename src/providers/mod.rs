//! HTTP-backed providers

pub mod coingecko_provider;
pub mod helius_provider;
pub mod icon_probe;

pub use coingecko_provider::CoinGeckoPriceProvider;
pub use helius_provider::HeliusAssetProvider;
pub use icon_probe::HttpIconProbe;
