use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which backend renders catalog pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Headless Chrome with JavaScript disabled
    Chrome,
    /// Plain HTTP GET of the server-rendered markup
    Http,
}

/// Options shared by the rendering backends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Run Chrome without a visible window
    pub headless: bool,
    /// Request timeout and navigation wait budget
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            headless: true,
            timeout: Duration::from_secs(30),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
        }
    }
}
