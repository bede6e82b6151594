//! # Booking Handlers
//!
//! Confirming new bookings and listing existing ones. The list endpoint runs
//! every stored booking through the filter engine, so the response is always
//! the filtered subset in chronological order.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;
use studiobook_core::{
    errors::BookingError,
    filter::{self, BookingFilter, Facets},
    models::booking::{BookingRecord, CreateBookingRequest},
};
use tracing::debug;

use super::parse_optional_date;
use crate::{
    extract::{ApiJson, ApiQuery},
    middleware::error_handling::AppError,
    ApiState,
};

/// Query parameters for the booking list
///
/// Empty values are ignored, so a cleared filter control can still send its
/// parameter.
#[derive(Debug, Default, Deserialize)]
pub struct BookingListQuery {
    /// Free text matched against user name, email and studio name
    pub q: Option<String>,

    /// Exact studio type
    #[serde(rename = "type")]
    pub studio_type: Option<String>,

    /// Exact `"{area}, {city}"` label
    pub location: Option<String>,

    /// Booking date as `YYYY-MM-DD`
    pub date: Option<String>,
}

impl BookingListQuery {
    pub fn into_filter(self) -> Result<BookingFilter, BookingError> {
        let date = parse_optional_date(self.date.as_deref())?;

        Ok(BookingFilter {
            query: self.q,
            studio_type: self.studio_type,
            location: self.location,
            date,
        })
    }
}

/// Confirms a booking for one studio slot
///
/// # Endpoint
///
/// ```text
/// POST /api/bookings
/// {"studio_id": 1, "name": "Ada", "email": "ada@example.com", "date": "2024-01-01", "slot": "10:00"}
/// ```
///
/// # Errors
///
/// * `BookingError::NotFound` - Unknown studio
/// * `BookingError::Validation` - Malformed body, blank name or email, or a slot the studio does not offer
/// * `BookingError::Conflict` - The slot is already booked for that date
/// * `BookingError::Storage` - The booking could not be persisted
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingRecord>), AppError> {
    let studio = state.catalog.get(payload.studio_id).ok_or_else(|| {
        BookingError::NotFound(format!("Studio with ID {} not found", payload.studio_id))
    })?;

    let record = state
        .bookings
        .record_booking(studio, &payload, state.slot_interval)
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    ApiQuery(query): ApiQuery<BookingListQuery>,
) -> Result<Json<Vec<BookingRecord>>, AppError> {
    let filter = query.into_filter()?;
    let bookings = state.bookings.load_bookings().await?;

    let result = filter::filter_bookings(&bookings, &filter);
    debug!("Booking list: {} of {} match {:?}", result.len(), bookings.len(), filter);

    Ok(Json(result))
}

/// Distinct studio types and locations across all bookings.
#[axum::debug_handler]
pub async fn booking_facets(State(state): State<Arc<ApiState>>) -> Result<Json<Facets>, AppError> {
    let bookings = state.bookings.load_bookings().await?;
    Ok(Json(filter::facets(&bookings)))
}
