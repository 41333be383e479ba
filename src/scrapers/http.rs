use crate::error::{Result, ScrapeError};
use crate::scrapers::traits::PageRenderer;
use crate::scrapers::types::RenderOptions;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// Page renderer that fetches the server-rendered markup over plain HTTP
/// The catalog is scraped with JavaScript disabled, so the static HTML
/// carries everything the extractor reads
pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    pub fn new(options: &RenderOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()
            .map_err(|e| ScrapeError::RendererSetup(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageRenderer for HttpRenderer {
    async fn render(&self, url: &str) -> Result<String> {
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::transport(url, e))?;

        if !response.status().is_success() {
            warn!("Catalog returned status: {}", response.status());
            return Err(ScrapeError::transport(
                url,
                format!("unexpected status {}", response.status()),
            ));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ScrapeError::transport(url, e))?;

        debug!("Downloaded {} bytes of HTML", html.len());
        Ok(html)
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}
