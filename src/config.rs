//! Command-line and environment configuration.

use crate::pipeline::{pagination::PAGE_SIZE, PipelineConfig};
use crate::scrapers::{RenderOptions, RendererKind};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CATALOG_URL: &str = "https://www.otodom.pl/shop/komornicze-licytacje-IDttMr";
const APP_NAME: &str = "BailiffAuctions";
const OUTPUT_PREFIX: &str = "aukcjekomornicze";

/// Harvest bailiff real-estate auctions into a CSV dataset.
#[derive(Debug, Parser)]
#[command(name = "auction-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Catalog root URL; pages are addressed with ?page=N
    #[arg(long, env = "AUCTION_URL", default_value = DEFAULT_CATALOG_URL)]
    pub url: String,

    /// Directory receiving the dated CSV file
    #[arg(short, long, env = "AUCTION_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Directory receiving the run log (default: output directory)
    #[arg(long, env = "AUCTION_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Page rendering backend
    #[arg(long, value_enum, env = "AUCTION_RENDERER", default_value_t = RendererKind::Chrome)]
    pub renderer: RendererKind,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub headed: bool,

    /// Request and navigation timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Fetch at most this many pages
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Also write a JSON snapshot next to the CSV
    #[arg(long)]
    pub json: bool,
}

/// Everything a run needs, resolved from the CLI
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub pipeline: PipelineConfig,
    pub renderer: RendererKind,
    pub render: RenderOptions,
    pub csv_path: PathBuf,
    pub json_path: Option<PathBuf>,
    pub log_path: PathBuf,
}

impl Cli {
    /// Resolve file names for the run date
    pub fn into_config(self, date: NaiveDate) -> RunConfig {
        let stamp = date.format("%Y-%m-%d");
        let log_dir = self.log_dir.unwrap_or_else(|| self.output_dir.clone());

        RunConfig {
            pipeline: PipelineConfig {
                catalog_url: self.url,
                page_size: PAGE_SIZE,
                max_pages: self.max_pages,
            },
            renderer: self.renderer,
            render: RenderOptions {
                headless: !self.headed,
                timeout: Duration::from_secs(self.timeout_secs),
                ..RenderOptions::default()
            },
            csv_path: self.output_dir.join(format!("{OUTPUT_PREFIX}_{stamp}.csv")),
            json_path: self
                .json
                .then(|| self.output_dir.join(format!("{OUTPUT_PREFIX}_{stamp}.json"))),
            log_path: log_dir.join(format!("{APP_NAME}_{stamp}.log")),
        }
    }
}
