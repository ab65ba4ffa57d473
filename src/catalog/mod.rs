pub mod filter;

use crate::error::BookingError;
use crate::models::{FilterCriteria, Listing};
use tracing::debug;

pub use filter::filter_listings;

/// In-memory listing collection backing both pages
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Look up a listing by id. Callers show a fallback on `NotFound`.
    pub fn find(&self, id: &str) -> Result<&Listing, BookingError> {
        self.listings
            .iter()
            .find(|listing| listing.id == id)
            .ok_or_else(|| BookingError::NotFound(id.to_string()))
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Listing> {
        let result = filter_listings(self.listings(), criteria);
        debug!(
            "Filter kept {} of {} listings ({} locations, {} amenities selected)",
            result.len(),
            self.listings.len(),
            criteria.locations.len(),
            criteria.amenities.len()
        );
        result
    }

    /// Distinct locations in first-seen order
    pub fn locations(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for listing in &self.listings {
            if !seen.contains(&listing.location.as_str()) {
                seen.push(&listing.location);
            }
        }
        seen
    }

    /// Distinct amenities in first-seen order
    pub fn amenities(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for amenity in self.listings.iter().flat_map(|l| l.amenities.iter()) {
            if !seen.contains(&amenity.as_str()) {
                seen.push(amenity);
            }
        }
        seen
    }
}

/// Listing page heading for a filtered result
pub fn availability_headline(count: usize) -> String {
    if count > 0 {
        format!("{} stays available", count)
    } else {
        "No stays match your filters".to_string()
    }
}
