use crate::error::{Result, ScrapeError};
use crate::pipeline::dom;
use crate::pipeline::markup::{Markup, OFFERS_INDEX_CLASS};
use scraper::ElementRef;
use tracing::info;

/// Listings shown per catalog page
pub const PAGE_SIZE: u32 = 25;

/// Number of pages needed to show `total` listings
pub fn page_count(total: u32, page_size: u32) -> u32 {
    total.div_ceil(page_size)
}

/// Read the total listing count from the summary element of the first page
pub fn total_listings(content: ElementRef<'_>, markup: &Markup) -> Result<u32> {
    let summary = dom::first(content, &markup.offers_index).ok_or_else(|| {
        ScrapeError::structure("listing count indicator", format!("no .{OFFERS_INDEX_CLASS} element"))
    })?;

    let total = dom::first(summary, &markup.offers_total)
        .map(dom::text)
        .ok_or_else(|| ScrapeError::structure("listing count indicator", "summary has no total"))?;

    // Large totals may be printed with thousands separators ("1 234")
    let digits: String = total.chars().filter(|c| !c.is_whitespace()).collect();
    digits.parse::<u32>().map_err(|_| {
        ScrapeError::structure("listing count indicator", format!("non-numeric total '{total}'"))
    })
}

/// Resolve how many pages the catalog spans
pub fn resolve(content: ElementRef<'_>, markup: &Markup, page_size: u32) -> Result<u32> {
    info!("Get number of pages.");
    let total = total_listings(content, markup)?;
    let pages = page_count(total, page_size);
    info!("Catalog lists {} offers on {} pages", total, pages);
    Ok(pages)
}
