//! Solana Balance Viewer Library
//!
//! Fetches a wallet's fungible token holdings, SOL balance and SOL price,
//! values them in USD and renders a sorted list of balance cards.

// Public modules - these are the API surface
pub mod config;
pub mod error;
pub mod fetcher;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod traits;
pub mod utils;
pub mod view;

// Re-export commonly used items for easier access
pub use config::Config;
pub use error::FetchError;
pub use fetcher::BalanceFetcher;
pub use handlers::ConsoleRenderer;
pub use models::{
    asset::{AssetBalance, PriceQuote},
    portfolio::PortfolioSnapshot,
};
pub use providers::{CoinGeckoPriceProvider, HeliusAssetProvider, HttpIconProbe};
pub use traits::{AssetProvider, IconProbe, PriceProvider, Renderer};
pub use utils::valuation;
pub use view::{BalanceCard, LoadedView, ViewController, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
