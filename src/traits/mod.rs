//! Core traits for the balance viewer

pub mod asset_provider;
pub mod price_provider;
pub mod renderer;

// Re-export for convenience
pub use asset_provider::AssetProvider;
pub use price_provider::PriceProvider;
pub use renderer::{IconProbe, Renderer};
