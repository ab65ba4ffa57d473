use crate::error::BookingError;
use crate::models::ReservationQuote;
use chrono::NaiveDate;

/// Service fee charged on top of the subtotal, in percent
pub const SERVICE_FEE_PERCENT: i64 = 14;

/// Parse the value of a date input. An empty string means "not selected yet".
pub fn parse_date_input(input: &str) -> Result<Option<NaiveDate>, BookingError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| BookingError::InvalidDate(input.to_string()))
}

/// Nights between two dates, ignoring which one comes first
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days().abs()
}

/// 14% of the subtotal, rounded to the nearest unit with ties away from zero.
///
/// The fee is always smaller in magnitude than the subtotal, so it fits in an `i64`.
pub fn service_fee(subtotal: i64) -> i64 {
    let scaled = subtotal as i128 * SERVICE_FEE_PERCENT as i128;
    let whole = scaled / 100;
    let remainder = scaled % 100;

    let fee = if remainder.abs() * 2 >= 100 {
        whole + scaled.signum()
    } else {
        whole
    };
    fee as i64
}

/// Amounts that do not fit in an `i64` are clamped to its bounds
fn saturating_breakdown(nightly_price: i64, nights: i64) -> ReservationQuote {
    let subtotal = nights.saturating_mul(nightly_price);
    let service_fee = service_fee(subtotal);

    ReservationQuote {
        nights,
        subtotal,
        service_fee,
        total: subtotal.saturating_add(service_fee),
    }
}

fn checked_breakdown(nightly_price: i64, nights: i64) -> Result<ReservationQuote, BookingError> {
    let overflow = || BookingError::AmountOverflow {
        nightly_price,
        nights,
    };

    let subtotal = nights.checked_mul(nightly_price).ok_or_else(overflow)?;
    let service_fee = service_fee(subtotal);
    let total = subtotal.checked_add(service_fee).ok_or_else(overflow)?;

    Ok(ReservationQuote {
        nights,
        subtotal,
        service_fee,
        total,
    })
}

/// Price breakdown shown next to the date inputs.
///
/// Returns an all-zero quote until both dates are selected. An inverted range
/// still yields a positive night count; use [`quote_stay`] when the range must
/// be valid. Amounts past `i64::MAX` saturate instead of wrapping.
pub fn quote(
    nightly_price: i64,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> ReservationQuote {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => {
            saturating_breakdown(nightly_price, nights_between(check_in, check_out))
        }
        _ => ReservationQuote::default(),
    }
}

/// Both dates of a selection, or `MissingDates`
pub fn require_dates(
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> Result<(NaiveDate, NaiveDate), BookingError> {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => Ok((check_in, check_out)),
        _ => Err(BookingError::MissingDates),
    }
}

/// Price a selected range; check-out must come after check-in
pub fn quote_range(
    nightly_price: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<ReservationQuote, BookingError> {
    if check_out <= check_in {
        return Err(BookingError::InvalidRange {
            check_in,
            check_out,
        });
    }

    checked_breakdown(nightly_price, (check_out - check_in).num_days())
}

/// Strict variant of [`quote`]: both dates required, check-out after check-in
/// and no amount overflow
pub fn quote_stay(
    nightly_price: i64,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> Result<ReservationQuote, BookingError> {
    let (check_in, check_out) = require_dates(check_in, check_out)?;
    quote_range(nightly_price, check_in, check_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Option<NaiveDate> {
        parse_date_input(s).unwrap()
    }

    #[test]
    fn test_missing_dates_give_zero_quote() {
        assert_eq!(quote(100, date(""), date("")), ReservationQuote::default());
        assert_eq!(
            quote(100, date("2024-03-01"), date("")),
            ReservationQuote::default()
        );
        assert_eq!(
            quote(100, None, date("2024-03-04")),
            ReservationQuote::default()
        );
        assert!(!quote(100, None, None).is_complete());
    }

    #[test]
    fn test_three_night_quote() {
        let q = quote(100, date("2024-03-01"), date("2024-03-04"));

        assert_eq!(q.nights, 3);
        assert_eq!(q.subtotal, 300);
        assert_eq!(q.service_fee, 42);
        assert_eq!(q.total, 342);
        assert!(q.is_complete());
    }

    #[test]
    fn test_same_day_is_zero_nights() {
        let q = quote(200, date("2024-03-10"), date("2024-03-10"));

        assert_eq!(q.nights, 0);
        assert_eq!(q.total, 0);
    }

    #[test]
    fn test_inverted_range_counts_absolute_nights() {
        let q = quote(100, date("2024-03-04"), date("2024-03-01"));

        assert_eq!(q.nights, 3);
        assert_eq!(q.total, 342);
    }

    #[test]
    fn test_month_and_leap_boundaries() {
        let q = quote(250, date("2024-02-27"), date("2024-03-02"));
        assert_eq!(q.nights, 4);

        let q = quote(250, date("2023-12-30"), date("2024-01-02"));
        assert_eq!(q.nights, 3);
    }

    #[test]
    fn test_service_fee_rounding() {
        assert_eq!(service_fee(0), 0);
        assert_eq!(service_fee(300), 42);
        // 25 * 0.14 = 3.5
        assert_eq!(service_fee(25), 4);
        // 10 * 0.14 = 1.4
        assert_eq!(service_fee(10), 1);
        // 1 * 0.14 = 0.14
        assert_eq!(service_fee(1), 0);
        assert_eq!(service_fee(-25), -4);
    }

    #[test]
    fn test_price_is_not_validated() {
        let q = quote(0, date("2024-03-01"), date("2024-03-03"));
        assert_eq!(q.nights, 2);
        assert_eq!(q.total, 0);

        let q = quote(-50, date("2024-03-01"), date("2024-03-03"));
        assert_eq!(q.subtotal, -100);
        assert_eq!(q.service_fee, -14);
    }

    #[test]
    fn test_large_price_does_not_overflow() {
        let q = quote(1_000_000_000_000_000_000, date("2024-03-01"), date("2024-03-04"));

        assert_eq!(q.nights, 3);
        assert_eq!(q.subtotal, 3_000_000_000_000_000_000);
        assert_eq!(q.service_fee, 420_000_000_000_000_000);
        assert_eq!(q.total, 3_420_000_000_000_000_000);

        let strict = quote_stay(1_000_000_000_000_000_000, date("2024-03-01"), date("2024-03-04"));
        assert_eq!(strict, Ok(q));
    }

    #[test]
    fn test_subtotal_past_i64_saturates() {
        let q = quote(4_000_000_000_000_000_000, date("2024-03-01"), date("2024-03-04"));

        assert_eq!(q.nights, 3);
        assert_eq!(q.subtotal, i64::MAX);
        assert_eq!(q.total, i64::MAX);

        let q = quote(i64::MIN, date("2024-03-01"), date("2024-03-03"));
        assert_eq!(q.subtotal, i64::MIN);
        assert_eq!(q.total, i64::MIN);
    }

    #[test]
    fn test_quote_stay_reports_overflow() {
        assert_eq!(
            quote_stay(4_000_000_000_000_000_000, date("2024-03-01"), date("2024-03-04")),
            Err(BookingError::AmountOverflow {
                nightly_price: 4_000_000_000_000_000_000,
                nights: 3
            })
        );

        // subtotal fits but subtotal + fee does not
        assert!(matches!(
            quote_stay(i64::MAX, date("2024-03-01"), date("2024-03-02")),
            Err(BookingError::AmountOverflow { .. })
        ));
    }

    #[test]
    fn test_service_fee_at_i64_bounds() {
        assert_eq!(service_fee(i64::MAX), 1_291_272_085_159_668_613);
        assert_eq!(service_fee(i64::MIN), -1_291_272_085_159_668_613);
    }

    #[test]
    fn test_quote_stay_matches_quote_for_valid_range() {
        let strict = quote_stay(180, date("2024-06-01"), date("2024-06-08")).unwrap();
        let lenient = quote(180, date("2024-06-01"), date("2024-06-08"));

        assert_eq!(strict, lenient);
    }

    #[test]
    fn test_quote_stay_rejects_bad_ranges() {
        assert_eq!(
            quote_stay(100, date("2024-03-01"), None),
            Err(BookingError::MissingDates)
        );

        let check_in = date("2024-03-04").unwrap();
        let check_out = date("2024-03-01").unwrap();
        assert_eq!(
            quote_stay(100, Some(check_in), Some(check_out)),
            Err(BookingError::InvalidRange {
                check_in,
                check_out
            })
        );

        assert!(matches!(
            quote_stay(100, Some(check_in), Some(check_in)),
            Err(BookingError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input("").unwrap(), None);
        assert_eq!(parse_date_input("   ").unwrap(), None);
        assert_eq!(
            parse_date_input("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(
            parse_date_input("03/01/2024"),
            Err(BookingError::InvalidDate("03/01/2024".to_string()))
        );
        assert!(parse_date_input("2024-02-30").is_err());
    }
}
