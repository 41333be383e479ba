use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One auction item as found on a catalog page, before its parameters are read
#[derive(Debug, Clone)]
pub struct RawListing<'a> {
    pub title: String,
    /// Text after the "Label: " prefix, `None` when the prefix was missing
    pub location_text: Option<String>,
    pub parameter_block: ElementRef<'a>,
}

/// A listing whose parameter block has been grouped by category
#[derive(Debug, Clone, PartialEq)]
pub struct MappedListing {
    pub title: String,
    pub location_text: Option<String>,
    pub params: ParameterMap,
}

/// Semantic attribute a parameter entry carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rooms,
    /// First value is building area, second is land area
    Area,
    Price,
}

/// Parameter values grouped by category, in the order they appear on the page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterMap {
    values: BTreeMap<Category, Vec<String>>,
}

impl ParameterMap {
    pub fn push(&mut self, category: Category, value: impl Into<String>) {
        self.values.entry(category).or_default().push(value.into());
    }

    pub fn values(&self, category: Category) -> &[String] {
        self.values
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn nth(&self, category: Category, index: usize) -> Option<&str> {
        self.values(category).get(index).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(Vec::is_empty)
    }
}

/// Canonical record for one listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub title: String,
    pub rooms: Option<String>,
    pub building_area: Option<String>,
    pub land_area: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
}

/// Offer after dataset cleaning, with the location split into city and district
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub title: String,
    pub rooms: Option<String>,
    pub building_area: Option<String>,
    pub land_area: Option<String>,
    pub price: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "District")]
    pub district: Option<String>,
}
