use std::io::Write;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::traits::renderer::Renderer;
use crate::view::layout::render_text;
use crate::view::state::ViewState;

/// Writes views to stdout
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Create a new console renderer
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Renderer for ConsoleRenderer {
    async fn render(&self, state: &ViewState) {
        let text = render_text(state);
        if text.is_empty() {
            debug!("Nothing to display");
            return;
        }

        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
            warn!("Failed to write to stdout: {}", e);
        }
    }
}
