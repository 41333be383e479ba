use crate::error::Result;
use async_trait::async_trait;

/// Common trait for page rendering backends
/// The pipeline only needs the rendered HTML of a URL; navigation, JavaScript
/// and waiting are the backend's concern
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Fetch and render the page at `url`, returning its full HTML
    async fn render(&self, url: &str) -> Result<String>;

    /// Get the name of the rendering backend
    fn backend_name(&self) -> &'static str;
}
