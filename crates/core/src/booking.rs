use crate::{
    errors::{BookingError, BookingResult},
    index::BookedSlotIndex,
    models::{
        booking::{BookingRecord, BookingTime, CreateBookingRequest, StudioSnapshot, UserInfo},
        studio::Studio,
    },
};

/// Confirms a booking request against the studio and the booked-slot index.
///
/// On success the slot is reserved in `index` and the new record is returned.
/// Any failure leaves `index` untouched.
///
/// # Errors
///
/// * `BookingError::Validation` - Name or email is blank, the request targets
///   another studio, or the studio does not offer the requested slot
/// * `BookingError::Conflict` - The slot is already taken for that date
pub fn confirm_booking(
    index: &mut BookedSlotIndex,
    studio: &Studio,
    request: &CreateBookingRequest,
    interval_minutes: u32,
) -> BookingResult<BookingRecord> {
    let name = request.name.trim();
    let email = request.email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(BookingError::Validation(
            "Please enter your name and email".to_string(),
        ));
    }

    if request.studio_id != studio.id {
        return Err(BookingError::Validation(format!(
            "Booking is for studio {} but was submitted against studio {}",
            request.studio_id, studio.id
        )));
    }

    if !studio.offered_slots(interval_minutes)?.contains(&request.slot) {
        return Err(BookingError::Validation(format!(
            "{} does not offer a slot at {}",
            studio.name, request.slot
        )));
    }

    index.reserve(studio.id, request.date, request.slot)?;

    Ok(BookingRecord {
        user: UserInfo {
            name: name.to_string(),
            email: email.to_string(),
        },
        studio: StudioSnapshot::from(studio),
        time: BookingTime {
            date: request.date,
            slot: request.slot,
        },
    })
}
