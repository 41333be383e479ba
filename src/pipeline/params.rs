use crate::models::{MappedListing, ParameterMap, RawListing};
use crate::pipeline::dom;
use crate::pipeline::markup::{category_for_label, Markup, CATEGORY_ATTR};
use scraper::ElementRef;
use tracing::debug;

/// Group the entries of a parameter block by category, keeping page order
/// within each category
pub fn map_parameters(block: ElementRef<'_>, markup: &Markup) -> ParameterMap {
    let mut params = ParameterMap::default();

    for entry in block.select(&markup.param_entry) {
        let label = dom::attr(entry, CATEGORY_ATTR).unwrap_or_default();
        match category_for_label(label) {
            Some(category) => params.push(category, dom::text(entry)),
            None => debug!("Ignoring parameter with unknown category '{}'", label),
        }
    }

    params
}

/// Replace a listing's parameter block with its grouped values
pub fn map_listing(listing: RawListing<'_>, markup: &Markup) -> MappedListing {
    let params = map_parameters(listing.parameter_block, markup);
    MappedListing {
        title: listing.title,
        location_text: listing.location_text,
        params,
    }
}
