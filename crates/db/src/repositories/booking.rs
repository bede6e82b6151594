use std::sync::Arc;

use eyre::{Result, WrapErr};
use serde::de::DeserializeOwned;
use studiobook_core::{
    booking::confirm_booking,
    errors::BookingResult,
    index::BookedSlotIndex,
    models::{
        booking::{BookingRecord, CreateBookingRequest},
        studio::Studio,
    },
};
use tokio::sync::Mutex;
use tracing::info;

use crate::store::KeyValueStore;

pub const BOOKED_SLOTS_KEY: &str = "bookedSlots";
pub const BOOKINGS_KEY: &str = "detailedBookings";

/// Booking list and booked-slot index on top of a [`KeyValueStore`].
///
/// Confirmations are serialized so two requests for the same slot cannot both
/// pass the collision check.
pub struct BookingRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl BookingRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        match self.store.get(key).await? {
            Some(value) => serde_json::from_value(value)
                .wrap_err_with(|| format!("Stored value under '{}' is malformed", key)),
            None => Ok(T::default()),
        }
    }

    pub async fn load_index(&self) -> Result<BookedSlotIndex> {
        self.load(BOOKED_SLOTS_KEY).await
    }

    /// All bookings in the order they were made.
    pub async fn load_bookings(&self) -> Result<Vec<BookingRecord>> {
        self.load(BOOKINGS_KEY).await
    }

    /// Confirms a booking and persists it together with the updated index.
    ///
    /// Nothing is written when confirmation fails.
    pub async fn record_booking(
        &self,
        studio: &Studio,
        request: &CreateBookingRequest,
        interval_minutes: u32,
    ) -> BookingResult<BookingRecord> {
        let _guard = self.write_lock.lock().await;

        let mut index = self.load_index().await?;
        let mut bookings = self.load_bookings().await?;

        let record = confirm_booking(&mut index, studio, request, interval_minutes)?;
        bookings.push(record.clone());

        let entries = vec![
            (
                BOOKED_SLOTS_KEY.to_string(),
                serde_json::to_value(&index).wrap_err("Failed to encode booked slots")?,
            ),
            (
                BOOKINGS_KEY.to_string(),
                serde_json::to_value(&bookings).wrap_err("Failed to encode bookings")?,
            ),
        ];
        self.store.put_all(entries).await?;

        info!(
            "Booking confirmed: studio={}, date={}, slot={}",
            studio.id, record.time.date, record.time.slot
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mock::MockStore, store::MemoryStore};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use studiobook_core::{
        errors::BookingError,
        models::studio::{Availability, Coordinates, StudioLocation},
    };

    fn studio() -> Studio {
        Studio {
            id: 1,
            name: "A Studio".to_string(),
            studio_type: "Recording".to_string(),
            location: StudioLocation {
                city: "Lagos".to_string(),
                area: "Lekki".to_string(),
                address: None,
                coordinates: Coordinates {
                    latitude: 6.47,
                    longitude: 3.58,
                },
            },
            availability: Availability::Hours {
                open: "09:00".to_string(),
                close: "18:00".to_string(),
            },
            price_per_hour: 60.0,
            currency: "USD".to_string(),
            rating: 4.2,
            images: vec![],
        }
    }

    fn request(name: &str, slot: &str) -> CreateBookingRequest {
        CreateBookingRequest {
            studio_id: 1,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            slot: slot.parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_record_booking_persists_record_and_index() {
        let repo = BookingRepository::new(Arc::new(MemoryStore::new()));

        repo.record_booking(&studio(), &request("Alice", "09:00"), 60).await.unwrap();
        repo.record_booking(&studio(), &request("Bob", "10:00"), 60).await.unwrap();

        let bookings = repo.load_bookings().await.unwrap();
        let names: Vec<&str> = bookings.iter().map(|b| b.user.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);

        let index = repo.load_index().await.unwrap();
        assert_eq!(index.len(), 2);
    }

    #[tokio::test]
    async fn test_collision_leaves_store_untouched() {
        let repo = BookingRepository::new(Arc::new(MemoryStore::new()));
        repo.record_booking(&studio(), &request("Alice", "09:00"), 60).await.unwrap();
        let index_before = repo.load_index().await.unwrap();

        let result = repo.record_booking(&studio(), &request("Carol", "09:00"), 60).await;

        assert!(matches!(result, Err(BookingError::Conflict(_))));
        assert_eq!(repo.load_index().await.unwrap(), index_before);
        assert_eq!(repo.load_bookings().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_requests_for_one_slot_book_once() {
        let repo = Arc::new(BookingRepository::new(Arc::new(MemoryStore::new())));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.record_booking(&studio(), &request(&format!("User{}", i), "15:00"), 60)
                        .await
                })
            })
            .collect();

        let mut confirmed = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                confirmed += 1;
            }
        }

        assert_eq!(confirmed, 1);
        assert_eq!(repo.load_bookings().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_storage_error() {
        let mut store = MockStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_put_all()
            .times(1)
            .returning(|_| Err(eyre::eyre!("connection reset")));
        let repo = BookingRepository::new(Arc::new(store));

        let result = repo.record_booking(&studio(), &request("Alice", "09:00"), 60).await;

        assert!(matches!(result, Err(BookingError::Storage(_))));
    }

    #[tokio::test]
    async fn test_malformed_stored_value_is_reported() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .withf(|key| key == BOOKINGS_KEY)
            .returning(|_| Ok(Some(json!({ "not": "a list" }))));
        let repo = BookingRepository::new(Arc::new(store));

        let err = repo.load_bookings().await.unwrap_err();
        assert!(err.to_string().contains(BOOKINGS_KEY));
    }
}
