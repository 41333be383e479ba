//! Extraction and normalisation of the auction catalog.
//!
//! The run resolves the page count from the catalog root, then walks the
//! pages in order: extract listings, map their parameters, assemble offers.
//! Cleaning runs once over everything collected.

pub mod assemble;
pub mod clean;
pub mod dom;
pub mod extract;
pub mod markup;
pub mod pagination;
pub mod params;

use crate::error::{Result, ScrapeError};
use crate::models::{CleanRecord, Offer};
use crate::scrapers::PageRenderer;
use extract::ListingOutcome;
use markup::{Markup, CONTENT_CLASS};
use scraper::{ElementRef, Html};
use tracing::{info, warn};

/// Inputs of a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub catalog_url: String,
    pub page_size: u32,
    /// Upper bound on the number of pages fetched
    pub max_pages: Option<u32>,
}

impl PipelineConfig {
    pub fn new(catalog_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            page_size: pagination::PAGE_SIZE,
            max_pages: None,
        }
    }
}

/// Offers assembled from one catalog page
#[derive(Debug, Clone)]
pub struct PageReport {
    pub page: u32,
    pub offers: Vec<Offer>,
    pub skipped: usize,
}

/// Outcome of a complete run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub pages: u32,
    pub records: Vec<CleanRecord>,
    pub processed: usize,
    pub skipped: usize,
}

/// URL of catalog page `page` (1-indexed)
pub fn page_url(catalog_url: &str, page: u32) -> String {
    let separator = if catalog_url.contains('?') { '&' } else { '?' };
    format!("{catalog_url}{separator}page={page}")
}

fn content_root<'a>(document: &'a Html, markup: &Markup) -> Result<ElementRef<'a>> {
    dom::first(document.root_element(), &markup.content)
        .ok_or_else(|| ScrapeError::structure("content container", format!("no .{CONTENT_CLASS} element")))
}

/// Page count advertised by the catalog's first page
pub fn resolve_page_count(html: &str, markup: &Markup, page_size: u32) -> Result<u32> {
    let document = Html::parse_document(html);
    let content = content_root(&document, markup)?;
    pagination::resolve(content, markup, page_size)
}

/// Turn one rendered page into offers. Listings missing a title or parameter
/// list are skipped; a page without its content container is an error.
pub fn process_page(html: &str, page: u32, markup: &Markup) -> Result<PageReport> {
    let document = Html::parse_document(html);
    let content = content_root(&document, markup)?;

    let mut offers = Vec::new();
    let mut skipped = 0;

    info!("Map article params to offers.");
    for outcome in extract::extract_listings(content, markup) {
        match outcome {
            ListingOutcome::Extracted(raw) => {
                let listing = params::map_listing(raw, markup);
                offers.push(assemble::assemble(listing));
            }
            ListingOutcome::Skipped { position, reason } => {
                warn!("Skipping listing {} on page {}: {}", position + 1, page, reason);
                skipped += 1;
            }
        }
    }

    Ok(PageReport {
        page,
        offers,
        skipped,
    })
}

/// Run the whole pipeline against `renderer`
pub async fn run(renderer: &dyn PageRenderer, config: &PipelineConfig) -> Result<RunReport> {
    let markup = Markup::compile()?;

    info!("Get number of pages from {} ({})", config.catalog_url, renderer.backend_name());
    let first_page = renderer.render(&config.catalog_url).await?;
    let mut pages = resolve_page_count(&first_page, &markup, config.page_size)?;
    drop(first_page);

    if let Some(max_pages) = config.max_pages {
        if pages > max_pages {
            info!("Limiting run to {} of {} pages", max_pages, pages);
            pages = max_pages;
        }
    }
    if pages == 0 {
        warn!("Catalog reports no offers");
    }

    let mut offers = Vec::new();
    let mut skipped = 0;

    for page in 1..=pages {
        let url = page_url(&config.catalog_url, page);
        info!("Get data from url: {}", url);

        let html = renderer.render(&url).await?;
        let report = process_page(&html, page, &markup)?;
        info!(
            "Page {}/{}: {} offers, {} skipped",
            report.page,
            pages,
            report.offers.len(),
            report.skipped
        );

        skipped += report.skipped;
        offers.extend(report.offers);
    }

    let processed = offers.len();
    let records = clean::clean(offers);

    Ok(RunReport {
        pages,
        records,
        processed,
        skipped,
    })
}
