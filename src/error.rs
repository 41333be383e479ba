//! Error types for the harvester.
//!
//! `Structure` and `FieldMissing` describe what the catalog page failed to
//! provide; the pipeline decides per call site whether they abort the run or
//! only drop a single listing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A required page landmark is missing or unreadable.
    #[error("Page structure error: missing {landmark} ({detail})")]
    Structure {
        landmark: &'static str,
        detail: String,
    },

    /// An expected sub-field of a listing is absent.
    #[error("Listing field missing: {field}")]
    FieldMissing { field: &'static str },

    /// The rendering collaborator could not deliver the page.
    #[error("Failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    /// The rendering backend could not be started.
    #[error("Renderer setup failed: {0}")]
    RendererSetup(String),

    /// A compiled-in CSS selector was rejected by the parser.
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn structure(landmark: &'static str, detail: impl Into<String>) -> Self {
        Self::Structure {
            landmark,
            detail: detail.into(),
        }
    }

    pub fn transport(url: &str, message: impl std::fmt::Display) -> Self {
        Self::Transport {
            url: url.to_string(),
            message: format!("{message:#}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
