//! # Slot Generation
//!
//! Turns a studio's opening hours into the list of bookable start times.
//! Slots are spaced by a fixed interval, begin at the opening time and must
//! finish by the closing time. A window that does not divide evenly simply
//! loses its tail; no shortened slot is emitted.
//!
//! Times live on a single notional day. `24:00` is accepted as a closing time
//! meaning end of day, and nothing ever wraps past midnight.

use crate::{
    errors::{BookingError, BookingResult},
    models::time_slot::{split_label, TimeSlot},
};

pub const DEFAULT_INTERVAL_MINUTES: u32 = 60;

const END_OF_DAY: u32 = 24 * 60;

fn parse_minutes(label: &str, allow_end_of_day: bool) -> BookingResult<u32> {
    match split_label(label) {
        Some((24, 0)) if allow_end_of_day => Ok(END_OF_DAY),
        Some((hour, minute)) if hour < 24 && minute < 60 => Ok(hour * 60 + minute),
        _ => Err(BookingError::Validation(format!(
            "Invalid time '{}', expected HH:MM",
            label
        ))),
    }
}

/// Generates slot start labels between `open` and `close`.
///
/// # Arguments
///
/// * `open` - Opening time as `HH:MM`
/// * `close` - Closing time as `HH:MM` (or `24:00`)
/// * `interval_minutes` - Distance between consecutive slots
///
/// # Returns
///
/// Every label from `open` in steps of `interval_minutes` whose slot ends at or
/// before `close`. When the window is shorter than one interval the result is
/// empty.
///
/// # Errors
///
/// * `BookingError::Validation` - A time is not `HH:MM`, or the interval is zero
///
/// # Example
///
/// ```
/// use studiobook_core::slots::generate_time_slots;
///
/// let slots = generate_time_slots("09:00", "11:00", 60).unwrap();
/// let labels: Vec<String> = slots.iter().map(ToString::to_string).collect();
/// assert_eq!(labels, ["09:00", "10:00"]);
/// ```
pub fn generate_time_slots(
    open: &str,
    close: &str,
    interval_minutes: u32,
) -> BookingResult<Vec<TimeSlot>> {
    if interval_minutes == 0 {
        return Err(BookingError::Validation(
            "Slot interval must be a positive number of minutes".to_string(),
        ));
    }

    let start = parse_minutes(open, false)?;
    let end = parse_minutes(close, true)?;

    let slots = (start..end)
        .step_by(interval_minutes as usize)
        .take_while(|minutes| minutes + interval_minutes <= end)
        .filter_map(TimeSlot::from_minutes)
        .collect();

    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn labels(slots: &[TimeSlot]) -> Vec<String> {
        slots.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case("09:00", "11:00", 60, vec!["09:00", "10:00"])]
    #[case("09:00", "09:30", 60, vec![])]
    #[case("09:00", "10:30", 30, vec!["09:00", "09:30", "10:00"])]
    #[case("09:15", "11:00", 45, vec!["09:15", "10:00"])]
    #[case("09:00", "10:00", 60, vec!["09:00"])]
    #[case("22:00", "24:00", 60, vec!["22:00", "23:00"])]
    #[case("18:00", "09:00", 60, vec![])]
    #[case("10:00", "10:00", 15, vec![])]
    fn test_generate_time_slots(
        #[case] open: &str,
        #[case] close: &str,
        #[case] interval: u32,
        #[case] expected: Vec<&str>,
    ) {
        let slots = generate_time_slots(open, close, interval).unwrap();
        assert_eq!(labels(&slots), expected);
    }

    #[test]
    fn test_full_day_with_default_interval() {
        let slots = generate_time_slots("00:00", "24:00", DEFAULT_INTERVAL_MINUTES).unwrap();
        assert_eq!(slots.len(), 24);
        assert_eq!(slots.last().unwrap().to_string(), "23:00");
    }

    #[test]
    fn test_slots_are_evenly_spaced_and_bounded() {
        let close = parse_minutes("17:40", false).unwrap();
        for interval in [1, 7, 25, 60, 90, 480] {
            let slots = generate_time_slots("08:05", "17:40", interval).unwrap();
            assert_eq!(slots[0].to_string(), "08:05");
            assert!(slots.iter().all(|slot| slot.minutes() + interval <= close));
            for pair in slots.windows(2) {
                assert_eq!(pair[1].minutes() - pair[0].minutes(), interval);
            }
        }
    }

    #[test]
    fn test_repeated_calls_agree() {
        let first = generate_time_slots("07:30", "21:00", 45).unwrap();
        let second = generate_time_slots("07:30", "21:00", 45).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let result = generate_time_slots("09:00", "17:00", 0);
        assert!(matches!(result, Err(BookingError::Validation(_))));
    }

    #[rstest]
    #[case("9am", "17:00")]
    #[case("09:00", "five")]
    #[case("24:00", "24:00")]
    #[case("09:00", "24:30")]
    #[case("09:60", "17:00")]
    fn test_invalid_times_are_rejected(#[case] open: &str, #[case] close: &str) {
        let result = generate_time_slots(open, close, 60);
        assert!(matches!(result, Err(BookingError::Validation(_))));
    }
}
