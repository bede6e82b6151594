use std::sync::Arc;

use axum_test::TestServer;
use studiobook_api::{app, ApiState};
use studiobook_core::catalog::StudioCatalog;
use studiobook_db::{
    repositories::booking::BookingRepository,
    store::{KeyValueStore, MemoryStore},
};

pub const CATALOG: &str = r#"{
    "Studios": [
        {
            "Id": 1, "Name": "A Studio", "Type": "Recording",
            "Location": { "City": "Lagos", "Area": "Lekki",
                          "Coordinates": { "Latitude": 6.4698, "Longitude": 3.5852 } },
            "PricePerHour": 80, "Currency": "NGN", "Rating": 4.6,
            "Availability": { "Open": "09:00", "Close": "12:00" },
            "Images": ["a.jpg"]
        },
        {
            "Id": 2, "Name": "B Studio", "Type": "Photography",
            "Location": { "City": "Lagos", "Area": "Ikeja",
                          "Coordinates": { "Latitude": 6.6018, "Longitude": 3.3515 } },
            "PricePerHour": 40, "Currency": "NGN", "Rating": 4.1,
            "Availability": { "Open": "10:00", "Close": "14:00" }
        },
        {
            "Id": 3, "Name": "Broken Hours", "Type": "Podcast",
            "Location": { "City": "Abuja", "Area": "Wuse",
                          "Coordinates": { "Latitude": 9.07, "Longitude": 7.48 } },
            "PricePerHour": 20, "Currency": "NGN", "Rating": 3.0,
            "Availability": { "Open": "noon", "Close": "18:00" }
        }
    ]
}"#;

pub fn build_state(store: Arc<dyn KeyValueStore>) -> Arc<ApiState> {
    let catalog = StudioCatalog::from_json_str(CATALOG).expect("Test catalog must parse");

    Arc::new(ApiState {
        catalog,
        bookings: BookingRepository::new(store),
        slot_interval: 60,
        nearby_radius_meters: 10_000.0,
    })
}

pub fn test_server() -> TestServer {
    server_with_store(Arc::new(MemoryStore::new()))
}

pub fn server_with_store(store: Arc<dyn KeyValueStore>) -> TestServer {
    TestServer::new(app(build_state(store))).expect("Failed to start test server")
}
