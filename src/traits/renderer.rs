use async_trait::async_trait;

use crate::view::state::ViewState;

/// Displays view state changes
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Render the current view state
    async fn render(&self, state: &ViewState);
}

/// Checks whether an icon URL can actually be loaded
#[async_trait]
pub trait IconProbe: Send + Sync {
    async fn is_loadable(&self, url: &str) -> bool;
}
