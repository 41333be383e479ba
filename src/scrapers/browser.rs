use crate::error::{Result, ScrapeError};
use crate::pipeline::markup::CONTENT_CLASS;
use crate::scrapers::traits::PageRenderer;
use crate::scrapers::types::RenderOptions;
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Page renderer backed by a headless Chrome instance
/// A single tab is reused for every page, the way a driver session would be
pub struct ChromeRenderer {
    tab: Arc<Tab>,
    // Keeps the Chrome process alive for as long as the tab is in use
    _browser: Browser,
}

impl ChromeRenderer {
    /// Launch Chrome and open the tab used for all catalog pages
    pub fn new(options: &RenderOptions) -> Result<Self> {
        info!("Launching Chrome (headless: {})...", options.headless);

        let launch_options = LaunchOptions::default_builder()
            .headless(options.headless)
            .args(vec![OsStr::new("--disable-javascript")])
            .build()
            .map_err(|e| ScrapeError::RendererSetup(format!("Failed to build launch options: {e}")))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| ScrapeError::RendererSetup(format!("Failed to launch Chrome browser: {e:#}")))?;

        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::RendererSetup(format!("Failed to open browser tab: {e:#}")))?;
        tab.set_default_timeout(options.timeout);

        Ok(Self {
            tab,
            _browser: browser,
        })
    }
}

#[async_trait]
impl PageRenderer for ChromeRenderer {
    async fn render(&self, url: &str) -> Result<String> {
        debug!("Navigating to {}", url);

        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| ScrapeError::transport(url, e))?;

        // A missing container is reported by the extractor with page context
        if let Err(e) = self.tab.wait_for_element(&format!(".{CONTENT_CLASS}")) {
            warn!("Content container did not appear on {}: {}", url, e);
        }

        let html = self
            .tab
            .get_content()
            .map_err(|e| ScrapeError::transport(url, e))?;

        debug!("Rendered {} bytes of HTML", html.len());
        Ok(html)
    }

    fn backend_name(&self) -> &'static str {
        "chrome"
    }
}
