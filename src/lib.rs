pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod scrapers;

pub use error::{Result, ScrapeError};
