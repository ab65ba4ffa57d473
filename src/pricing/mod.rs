pub mod quote;
pub mod reservation;

pub use quote::{parse_date_input, quote, quote_range, quote_stay, require_dates};
pub use reservation::{reserve, ReservationRequest};
