//! # Studio Handlers
//!
//! Catalog browsing: search by name or area, the optional "nearby" radius
//! filter, area suggestions for the location search box, and the slot picker
//! for a single studio.

use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use studiobook_core::{
    catalog::within_radius,
    errors::BookingError,
    models::{
        booking::SlotAvailability,
        studio::{Coordinates, Studio},
    },
};

use super::parse_optional_date;
use crate::{
    extract::{ApiPath, ApiQuery},
    middleware::error_handling::AppError,
    ApiState,
};

/// Query parameters for the studio listing
///
/// `lat` and `lon` enable the nearby filter and must be given together.
#[derive(Debug, Default, Deserialize)]
pub struct StudioSearchQuery {
    /// Substring of the studio name or area
    pub search: Option<String>,

    /// Latitude of the caller
    pub lat: Option<f64>,

    /// Longitude of the caller
    pub lon: Option<f64>,

    /// Nearby radius in kilometers, overriding the configured default
    pub radius_km: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SlotQuery {
    /// Date to mark booked slots for, as `YYYY-MM-DD`
    pub date: Option<String>,
}

fn find_studio(state: &ApiState, id: u32) -> Result<&Studio, AppError> {
    state
        .catalog
        .get(id)
        .ok_or_else(|| AppError(BookingError::NotFound(format!("Studio with ID {} not found", id))))
}

/// Lists studios matching the search text, optionally limited to those near
/// the caller.
///
/// # Endpoint
///
/// ```text
/// GET /api/studios?search=lekki&lat=6.45&lon=3.47&radius_km=10
/// ```
///
/// # Errors
///
/// * `BookingError::Validation` - Only one coordinate given, or a non-positive radius
#[axum::debug_handler]
pub async fn list_studios(
    State(state): State<Arc<ApiState>>,
    ApiQuery(query): ApiQuery<StudioSearchQuery>,
) -> Result<Json<Vec<Studio>>, AppError> {
    let studios = state.catalog.search(query.search.as_deref().unwrap_or(""));

    let studios = match (query.lat, query.lon) {
        (Some(latitude), Some(longitude)) => {
            let radius_meters = match query.radius_km {
                Some(km) if km.is_finite() && km > 0.0 => km * 1000.0,
                Some(_) => {
                    return Err(AppError(BookingError::Validation(
                        "radius_km must be a positive number".to_string(),
                    )));
                }
                None => state.nearby_radius_meters,
            };
            within_radius(studios, Coordinates { latitude, longitude }, radius_meters)
        }
        (None, None) => studios,
        _ => {
            return Err(AppError(BookingError::Validation(
                "lat and lon must be provided together".to_string(),
            )));
        }
    };

    Ok(Json(studios.into_iter().cloned().collect()))
}

/// Distinct studio areas, in catalog order.
pub async fn list_locations(State(state): State<Arc<ApiState>>) -> Json<Vec<String>> {
    Json(state.catalog.area_suggestions())
}

#[axum::debug_handler]
pub async fn get_studio(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<u32>,
) -> Result<Json<Studio>, AppError> {
    Ok(Json(find_studio(&state, id)?.clone()))
}

/// Slots a studio offers, each flagged when already taken on `date`.
///
/// Without a date, or with a blank one, every slot is reported free.
///
/// # Endpoint
///
/// ```text
/// GET /api/studios/1/slots?date=2024-01-01
/// ```
///
/// # Errors
///
/// * `BookingError::NotFound` - Unknown studio
/// * `BookingError::Validation` - Malformed date, or the studio's opening hours are malformed
/// * `BookingError::Storage` - The booked-slot index could not be read
#[axum::debug_handler]
pub async fn get_studio_slots(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<u32>,
    ApiQuery(query): ApiQuery<SlotQuery>,
) -> Result<Json<Vec<SlotAvailability>>, AppError> {
    let studio = find_studio(&state, id)?;
    let offered = studio.offered_slots(state.slot_interval)?;

    let taken = match parse_optional_date(query.date.as_deref())? {
        Some(date) => state.bookings.load_index().await?.booked_slots(studio.id, date),
        None => Vec::new(),
    };

    let slots = offered
        .into_iter()
        .map(|slot| SlotAvailability {
            slot,
            booked: taken.contains(&slot),
        })
        .collect();

    Ok(Json(slots))
}
