//! Catalog markup the pipeline depends on.
//!
//! Every tag and class name read from the auction pages lives here, so a
//! change in the catalog's markup is a change to this file only.

use crate::error::Result;
use crate::models::Category;
use crate::pipeline::dom;
use scraper::Selector;

/// Column holding the listing summary and the item list
pub const CONTENT_CLASS: &str = "col-md-shop-content";
/// Summary element whose `<strong>` child carries the total listing count
pub const OFFERS_INDEX_CLASS: &str = "offers-index";
pub const OFFERS_TOTAL_TAG: &str = "strong";
/// One auction item
pub const LISTING_TAG: &str = "article";
pub const TITLE_CLASS: &str = "offer-item-title";
/// First paragraph of an item, formatted as "Label: City, County, District"
pub const LOCATION_TAG: &str = "p";
pub const LOCATION_SEPARATOR: &str = ": ";
pub const PARAMS_CLASS: &str = "params";
pub const PARAM_ENTRY_TAG: &str = "li";
/// Attribute of a parameter entry naming its category
pub const CATEGORY_ATTR: &str = "class";

/// Category labels as the catalog assigns them, matched by exact equality
pub const CATEGORY_LABELS: [(&str, Category); 3] = [
    ("offer-item-rooms hidden-xs", Category::Rooms),
    ("hidden-xs offer-item-area", Category::Area),
    ("offer-item-price", Category::Price),
];

pub fn category_for_label(label: &str) -> Option<Category> {
    CATEGORY_LABELS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, category)| *category)
}

/// Selectors compiled once per run
#[derive(Debug, Clone)]
pub struct Markup {
    pub content: Selector,
    pub offers_index: Selector,
    pub offers_total: Selector,
    pub listing: Selector,
    pub title: Selector,
    pub location: Selector,
    pub params: Selector,
    pub param_entry: Selector,
}

impl Markup {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            content: dom::by_class(CONTENT_CLASS)?,
            offers_index: dom::by_class(OFFERS_INDEX_CLASS)?,
            offers_total: dom::by_tag(OFFERS_TOTAL_TAG)?,
            listing: dom::by_tag(LISTING_TAG)?,
            title: dom::by_class(TITLE_CLASS)?,
            location: dom::by_tag(LOCATION_TAG)?,
            params: dom::by_class(PARAMS_CLASS)?,
            param_entry: dom::by_tag(PARAM_ENTRY_TAG)?,
        })
    }
}
