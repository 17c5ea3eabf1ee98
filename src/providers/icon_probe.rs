use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::traits::renderer::IconProbe;

/// Probes icons with an HTTP HEAD request
pub struct HttpIconProbe {
    client: Client,
    timeout: Duration,
}

impl HttpIconProbe {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }
}

impl Default for HttpIconProbe {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

#[async_trait]
impl IconProbe for HttpIconProbe {
    async fn is_loadable(&self, url: &str) -> bool {
        match self.client.head(url).timeout(self.timeout).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                debug!("Icon {} returned {}", url, response.status());
                false
            }
            Err(e) => {
                debug!("Icon {} failed to load: {}", url, e);
                false
            }
        }
    }
}
