//! Data models for the balance viewer

pub mod asset;
pub mod portfolio;

// Re-export for convenience
pub use asset::{AssetBalance, PriceQuote};
pub use portfolio::PortfolioSnapshot;
