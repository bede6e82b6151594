use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{studio::Studio, time_slot::TimeSlot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedLocation {
    pub city: String,
    pub area: String,
}

/// Copy of the studio attributes taken when the booking was confirmed.
///
/// Later catalog edits never reach records that were already written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioSnapshot {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub studio_type: String,
    pub location: BookedLocation,
}

impl StudioSnapshot {
    /// Combined `"{area}, {city}"` label used by the location filter.
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.location.area, self.location.city)
    }
}

impl From<&Studio> for StudioSnapshot {
    fn from(studio: &Studio) -> Self {
        Self {
            id: studio.id,
            name: studio.name.clone(),
            studio_type: studio.studio_type.clone(),
            location: BookedLocation {
                city: studio.location.city.clone(),
                area: studio.location.area.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingTime {
    pub date: NaiveDate,
    pub slot: TimeSlot,
}

impl BookingTime {
    pub fn instant(&self) -> NaiveDateTime {
        self.date.and_time(self.slot.time())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub user: UserInfo,
    pub studio: StudioSnapshot,
    pub time: BookingTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub studio_id: u32,
    pub name: String,
    pub email: String,
    pub date: NaiveDate,
    pub slot: TimeSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub slot: TimeSlot,
    pub booked: bool,
}
