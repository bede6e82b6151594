use serde::{Deserialize, Serialize};

use crate::{errors::BookingResult, models::time_slot::TimeSlot, slots};

/// A studio as published in the catalog fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Studio {
    pub id: u32,
    pub name: String,
    #[serde(rename = "Type")]
    pub studio_type: String,
    pub location: StudioLocation,
    pub availability: Availability,
    pub price_per_hour: f64,
    pub currency: String,
    pub rating: f32,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StudioLocation {
    pub city: String,
    pub area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Opening hours of a studio.
///
/// Catalogs normally publish `{ "Open": "09:00", "Close": "18:00" }`. Older
/// fixtures list the bookable labels directly; those are accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Availability {
    // Listed first so a two-element array is never read as `Hours`
    Slots(Vec<TimeSlot>),
    Hours {
        #[serde(rename = "Open")]
        open: String,
        #[serde(rename = "Close")]
        close: String,
    },
}

impl Availability {
    /// Bookable slot labels, in chronological order.
    pub fn slots(&self, interval_minutes: u32) -> BookingResult<Vec<TimeSlot>> {
        match self {
            Availability::Hours { open, close } => {
                slots::generate_time_slots(open, close, interval_minutes)
            }
            Availability::Slots(fixed) => {
                let mut fixed = fixed.clone();
                fixed.sort();
                fixed.dedup();
                Ok(fixed)
            }
        }
    }
}

impl Studio {
    pub fn offered_slots(&self, interval_minutes: u32) -> BookingResult<Vec<TimeSlot>> {
        self.availability.slots(interval_minutes)
    }
}
