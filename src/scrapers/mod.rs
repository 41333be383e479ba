pub mod browser;
pub mod http;
pub mod traits;
pub mod types;

pub use browser::ChromeRenderer;
pub use http::HttpRenderer;
pub use traits::PageRenderer;
pub use types::{RenderOptions, RendererKind};

use crate::error::Result;

/// Build the renderer selected on the command line
pub fn build_renderer(kind: RendererKind, options: &RenderOptions) -> Result<Box<dyn PageRenderer>> {
    let renderer: Box<dyn PageRenderer> = match kind {
        RendererKind::Chrome => Box::new(ChromeRenderer::new(options)?),
        RendererKind::Http => Box::new(HttpRenderer::new(options)?),
    };
    Ok(renderer)
}
