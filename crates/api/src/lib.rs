//! # StudioBook API
//!
//! The API crate provides the web server for the StudioBook booking service.
//! It exposes the studio catalog, the slot picker, booking confirmation and
//! the filtered booking list over JSON.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into catalog, filter and repository calls
//! - **Middleware**: Error mapping
//! - **Extract**: Body, query and path extractors that report through the error mapping
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. Bookings go through a
//! `BookingRepository` backed by any `KeyValueStore`.

/// Configuration module for API settings
pub mod config;
/// Request extractors with JSON error reporting
pub mod extract;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use eyre::{Result, WrapErr};
use studiobook_core::catalog::StudioCatalog;
use studiobook_db::{repositories::booking::BookingRepository, store::KeyValueStore};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Studios available for booking
    pub catalog: StudioCatalog,
    /// Persisted bookings and booked-slot index
    pub bookings: BookingRepository,
    /// Minutes between generated slots
    pub slot_interval: u32,
    /// Default radius of the nearby filter
    pub nearby_radius_meters: f64,
}

impl ApiState {
    pub fn new(catalog: StudioCatalog, store: Arc<dyn KeyValueStore>, config: &config::ApiConfig) -> Self {
        Self {
            catalog,
            bookings: BookingRepository::new(store),
            slot_interval: config.slot_interval,
            nearby_radius_meters: config.nearby_radius_km * 1000.0,
        }
    }
}

/// Installs the global tracing subscriber at the given level
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the application router with all routes attached to `state`
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Studio catalog and slot picker
        .merge(routes::studios::routes())
        // Booking confirmation and listing
        .merge(routes::bookings::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
        .allow_origin(origins)
}

/// Starts the API server
///
/// Loads the studio catalog, wires the booking repository to `store`,
/// configures routes and serves HTTP until the process stops.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `store` - Persistence backend for bookings
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use studiobook_api::{config::ApiConfig, start_server};
/// # use studiobook_db::store::MemoryStore;
/// # async fn run() -> eyre::Result<()> {
/// let config = ApiConfig::from_env()?;
/// start_server(config, Arc::new(MemoryStore::new())).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn KeyValueStore>) -> Result<()> {
    let catalog = StudioCatalog::load(&config.catalog_path)
        .wrap_err("Failed to load the studio catalog")?;
    info!(
        "Loaded {} studios from {}",
        catalog.studios().len(),
        config.catalog_path.display()
    );

    let state = Arc::new(ApiState::new(catalog, store, &config));

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
