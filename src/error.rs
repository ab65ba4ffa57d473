use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by catalog lookups, pricing and the reserve action
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Property not found: {0}")]
    NotFound(String),

    #[error("Please select check-in and check-out dates")]
    MissingDates,

    #[error("Check-out {check_out} must be after check-in {check_in}")]
    InvalidRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Price {nightly_price} for {nights} nights is out of range")]
    AmountOverflow { nightly_price: i64, nights: i64 },

    #[error("{requested} guests requested but the listing sleeps {capacity}")]
    GuestCapacity { requested: u32, capacity: u32 },

    #[error("Email and password are required")]
    InvalidCredentials,
}
