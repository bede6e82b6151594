//! # Booking Filters
//!
//! Facet extraction and compound filtering over the booking list.
//!
//! Facets feed the filter controls: the distinct studio types and the distinct
//! `"{area}, {city}"` location labels, each in the order they first appear.
//! Filtering ANDs every criterion that is present and returns the survivors
//! ordered by booking date and slot. The sort is stable, so bookings for the
//! same instant keep their insertion order.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::booking::BookingRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub studio_types: Vec<String>,
    pub locations: Vec<String>,
}

/// Optional criteria applied to the booking list.
///
/// An absent criterion, or an empty string, imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingFilter {
    /// Case-insensitive substring of user name, user email or studio name
    pub query: Option<String>,
    /// Exact studio type
    pub studio_type: Option<String>,
    /// Exact `"{area}, {city}"` label
    pub location: Option<String>,
    /// Exact booking date
    pub date: Option<NaiveDate>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn first_seen<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

pub fn facets(records: &[BookingRecord]) -> Facets {
    Facets {
        studio_types: first_seen(records.iter().map(|r| r.studio.studio_type.clone())),
        locations: first_seen(records.iter().map(|r| r.studio.location_label())),
    }
}

impl BookingFilter {
    pub fn is_empty(&self) -> bool {
        present(&self.query).is_none()
            && present(&self.studio_type).is_none()
            && present(&self.location).is_none()
            && self.date.is_none()
    }

    pub fn matches(&self, record: &BookingRecord) -> bool {
        if let Some(query) = present(&self.query) {
            let needle = query.to_lowercase();
            let hit = [&record.user.name, &record.user.email, &record.studio.name]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(studio_type) = present(&self.studio_type) {
            if record.studio.studio_type != studio_type {
                return false;
            }
        }

        if let Some(location) = present(&self.location) {
            if record.studio.location_label() != location {
                return false;
            }
        }

        if let Some(date) = self.date {
            if record.time.date != date {
                return false;
            }
        }

        true
    }
}

/// Returns the bookings matching `filter`, earliest first.
pub fn filter_bookings(records: &[BookingRecord], filter: &BookingFilter) -> Vec<BookingRecord> {
    let mut result: Vec<BookingRecord> = records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();

    // sort_by_key is stable
    result.sort_by_key(|record| record.time.instant());
    result
}
