use crate::models::{Category, MappedListing, Offer};

/// Build the canonical offer from a mapped listing
/// Values stay as page text; nothing is parsed here
pub fn assemble(listing: MappedListing) -> Offer {
    let value = |category, index| listing.params.nth(category, index).map(str::to_string);

    Offer {
        rooms: value(Category::Rooms, 0),
        building_area: value(Category::Area, 0),
        land_area: value(Category::Area, 1),
        price: value(Category::Price, 0),
        title: listing.title,
        location: listing.location_text,
    }
}
