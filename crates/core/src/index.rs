use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{BookingError, BookingResult},
    models::time_slot::TimeSlot,
};

/// Slots already taken, per studio and date.
///
/// The index only grows. A `(studio, date, slot)` triple is present at most
/// once, which is the single consistency guarantee bookings get.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookedSlotIndex {
    studios: BTreeMap<u32, BTreeMap<NaiveDate, BTreeSet<TimeSlot>>>,
}

impl BookedSlotIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_booked(&self, studio_id: u32, date: NaiveDate, slot: TimeSlot) -> bool {
        self.studios
            .get(&studio_id)
            .and_then(|dates| dates.get(&date))
            .is_some_and(|slots| slots.contains(&slot))
    }

    pub fn booked_slots(&self, studio_id: u32, date: NaiveDate) -> Vec<TimeSlot> {
        self.studios
            .get(&studio_id)
            .and_then(|dates| dates.get(&date))
            .map(|slots| slots.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Marks a slot as taken.
    ///
    /// # Errors
    ///
    /// * `BookingError::Conflict` - The slot is already taken; the index is left as it was
    pub fn reserve(&mut self, studio_id: u32, date: NaiveDate, slot: TimeSlot) -> BookingResult<()> {
        if self.is_booked(studio_id, date, slot) {
            return Err(BookingError::Conflict(format!(
                "Studio {} is already booked on {} at {}",
                studio_id, date, slot
            )));
        }

        self.studios
            .entry(studio_id)
            .or_default()
            .entry(date)
            .or_default()
            .insert(slot);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.studios
            .values()
            .flat_map(|dates| dates.values())
            .map(BTreeSet::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
