//! Dataset-level cleaning applied once over all collected offers.

use crate::models::{CleanRecord, Offer};
use tracing::info;

/// Title marker of land-plot listings ("działka")
pub const PLOT_MARKER: &str = "Działk";
pub const LOCATION_SEPARATOR: &str = ", ";

/// Location components in the order the catalog prints them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationParts {
    pub city: Option<String>,
    pub county: Option<String>,
    pub district: Option<String>,
}

pub fn is_land_plot(title: &str) -> bool {
    title.to_lowercase().contains(&PLOT_MARKER.to_lowercase())
}

/// Move the single reported area of a land-only listing from building to land
/// area. Offers without a building area are left untouched.
pub fn reclassify_land(offer: &mut Offer) {
    if offer.rooms.is_none() && is_land_plot(&offer.title) {
        if let Some(area) = offer.building_area.take() {
            offer.land_area = Some(area);
        }
    }
}

/// Split "City, County, District" into at most three parts. Missing trailing
/// parts are `None`; anything after the second separator belongs to the district.
pub fn split_location(location: &str) -> LocationParts {
    let mut parts = location.splitn(3, LOCATION_SEPARATOR).map(|part| {
        let part = part.trim_matches(|c: char| c.is_whitespace() || c == ',');
        (!part.is_empty()).then(|| part.to_string())
    });

    LocationParts {
        city: parts.next().flatten(),
        county: parts.next().flatten(),
        district: parts.next().flatten(),
    }
}

/// City and district of a location, the district falling back to the county
pub fn decompose_location(location: Option<&str>) -> (Option<String>, Option<String>) {
    let LocationParts {
        city,
        county,
        district,
    } = location.map(split_location).unwrap_or_default();

    (city, district.or(county))
}

pub fn clean_offer(mut offer: Offer) -> CleanRecord {
    reclassify_land(&mut offer);
    let (city, district) = decompose_location(offer.location.as_deref());

    CleanRecord {
        title: offer.title,
        rooms: offer.rooms,
        building_area: offer.building_area,
        land_area: offer.land_area,
        price: offer.price,
        city,
        district,
    }
}

/// Clean every offer, preserving collection order
pub fn clean(offers: Vec<Offer>) -> Vec<CleanRecord> {
    info!("Clean dataset of {} offers.", offers.len());
    offers.into_iter().map(clean_offer).collect()
}
