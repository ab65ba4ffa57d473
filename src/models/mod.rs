use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Host of a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub name: String,
    pub avatar: String,
    /// Free text, e.g. "2019" or "March 2021"
    pub joined_date: String,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Price per night in whole currency units
    pub price: i64,
    pub rating: f64,
    pub review_count: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub host: Host,
    pub guests: u32,
    pub bedrooms: u32,
    pub beds: u32,
    pub baths: u32,
    pub description: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
}

impl Listing {
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }
}

/// User-selected constraints for the listing page.
///
/// Empty sets mean "no constraint" on that dimension. The dates are carried
/// along with the rest of the filter panel state but are not matched against
/// anything, since listings have no availability calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub locations: BTreeSet<String>,
    pub amenities: BTreeSet<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.insert(location.into());
        self
    }

    pub fn with_amenity(mut self, amenity: impl Into<String>) -> Self {
        self.amenities.insert(amenity.into());
        self
    }

    pub fn with_dates(mut self, check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    /// True when no dimension constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.locations.is_empty() && self.amenities.is_empty()
    }
}

/// Price breakdown for a stay. Derived, never stored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationQuote {
    pub nights: i64,
    pub subtotal: i64,
    pub service_fee: i64,
    pub total: i64,
}

impl ReservationQuote {
    /// A zero-night quote means the date selection is incomplete, not a free stay
    pub fn is_complete(&self) -> bool {
        self.nights > 0
    }
}

/// Acknowledgment of a reserve action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub listing_id: String,
    pub listing_title: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub quote: ReservationQuote,
}

impl Reservation {
    pub fn confirmation(&self) -> String {
        format!(
            "Reservation confirmed!\n\nProperty: {}\nCheck-in: {}\nCheck-out: {}\nGuests: {}\nTotal: ${}",
            self.listing_title, self.check_in, self.check_out, self.guests, self.quote.total
        )
    }
}

/// Signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub email: String,
}
