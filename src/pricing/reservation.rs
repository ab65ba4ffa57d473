use crate::error::BookingError;
use crate::models::{Listing, Reservation};
use crate::pricing::{quote_range, require_dates};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// State of the booking widget when "Reserve" is pressed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
}

impl Default for ReservationRequest {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            guests: 1,
        }
    }
}

impl ReservationRequest {
    pub fn new(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>, guests: u32) -> Self {
        Self {
            check_in,
            check_out,
            guests,
        }
    }
}

/// Validate a request against a listing and acknowledge it.
///
/// Nothing is stored and no inventory changes; the returned value only
/// describes what would be booked.
pub fn reserve(listing: &Listing, request: &ReservationRequest) -> Result<Reservation, BookingError> {
    let (check_in, check_out) = require_dates(request.check_in, request.check_out)?;
    let quote = quote_range(listing.price, check_in, check_out)?;

    if request.guests == 0 || request.guests > listing.guests {
        return Err(BookingError::GuestCapacity {
            requested: request.guests,
            capacity: listing.guests,
        });
    }

    info!(
        "Reservation acknowledged for {} ({} nights, total {})",
        listing.id, quote.nights, quote.total
    );

    Ok(Reservation {
        listing_id: listing.id.clone(),
        listing_title: listing.title.clone(),
        check_in,
        check_out,
        guests: request.guests,
        quote,
    })
}
