use crate::error::{Result, ScrapeError};
use crate::models::RawListing;
use crate::pipeline::dom;
use crate::pipeline::markup::{Markup, LOCATION_SEPARATOR, PARAMS_CLASS, TITLE_CLASS};
use scraper::ElementRef;
use tracing::{info, warn};

/// Result of extracting one item container
#[derive(Debug)]
pub enum ListingOutcome<'a> {
    Extracted(RawListing<'a>),
    /// The item lacked a title or parameter list and was dropped
    Skipped { position: usize, reason: ScrapeError },
}

/// Value part of a "Label: value" paragraph
pub fn location_from_label(text: &str) -> Option<&str> {
    text.split_once(LOCATION_SEPARATOR).map(|(_, value)| value)
}

/// Extract every item container of a page, in page order
pub fn extract_listings<'a>(content: ElementRef<'a>, markup: &Markup) -> Vec<ListingOutcome<'a>> {
    info!("Get web articles from page.");
    content
        .select(&markup.listing)
        .enumerate()
        .map(|(position, item)| match extract_listing(item, markup) {
            Ok(listing) => ListingOutcome::Extracted(listing),
            Err(reason) => ListingOutcome::Skipped { position, reason },
        })
        .collect()
}

fn extract_listing<'a>(item: ElementRef<'a>, markup: &Markup) -> Result<RawListing<'a>> {
    let title = dom::first(item, &markup.title)
        .map(dom::text)
        .filter(|title| !title.is_empty())
        .ok_or_else(|| ScrapeError::structure("listing title", format!("no .{TITLE_CLASS} text")))?;

    let parameter_block = dom::first(item, &markup.params)
        .ok_or_else(|| ScrapeError::structure("parameter list", format!("no .{PARAMS_CLASS} element")))?;

    let location_text = match read_location(item, markup) {
        Ok(location) => Some(location),
        Err(e) => {
            warn!("Listing '{}': {}", title, e);
            None
        }
    };

    Ok(RawListing {
        title,
        location_text,
        parameter_block,
    })
}

fn read_location(item: ElementRef<'_>, markup: &Markup) -> Result<String> {
    let paragraph = dom::first(item, &markup.location)
        .map(dom::text)
        .ok_or(ScrapeError::FieldMissing { field: "location paragraph" })?;

    location_from_label(&paragraph)
        .map(str::to_string)
        .ok_or(ScrapeError::FieldMissing { field: "location separator" })
}
