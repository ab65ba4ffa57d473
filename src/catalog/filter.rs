use crate::models::{FilterCriteria, Listing};

/// Check a single listing against every active dimension of the criteria
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    if !criteria.locations.is_empty() && !criteria.locations.contains(&listing.location) {
        return false;
    }

    // All selected amenities must be present, not just one of them
    if !criteria
        .amenities
        .iter()
        .all(|amenity| listing.has_amenity(amenity))
    {
        return false;
    }

    true
}

/// Stable filter over a listing sequence. The input is never reordered or mutated.
pub fn filter_listings<'a, I>(listings: I, criteria: &FilterCriteria) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    if criteria.is_unconstrained() {
        return listings.into_iter().collect();
    }

    listings
        .into_iter()
        .filter(|listing| matches(listing, criteria))
        .collect()
}
