pub mod bookings;
pub mod studios;

use chrono::NaiveDate;
use studiobook_core::errors::{BookingError, BookingResult};

/// Parses an optional `YYYY-MM-DD` query value. Blank values count as absent.
pub(crate) fn parse_optional_date(value: Option<&str>) -> BookingResult<Option<NaiveDate>> {
    match value.map(str::trim) {
        Some(date) if !date.is_empty() => date.parse::<NaiveDate>().map(Some).map_err(|_| {
            BookingError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", date))
        }),
        _ => Ok(None),
    }
}
