//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the StudioBook API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (optional, bookings stay in memory without it)
//! - `STUDIO_CATALOG_PATH`: Path to the studio catalog JSON (default: "data/studios.json")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `SLOT_INTERVAL_MINUTES`: Length of a bookable slot (default: 60)
//! - `NEARBY_RADIUS_KM`: Radius of the nearby studio filter (default: 10)

use eyre::{eyre, Result, WrapErr};
use std::{env, path::PathBuf};
use studiobook_core::slots::DEFAULT_INTERVAL_MINUTES;
use tracing::Level;

/// Configuration for the StudioBook API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use studiobook_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: Option<String>,

    /// Studio catalog fixture
    pub catalog_path: PathBuf,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Minutes between generated slots
    pub slot_interval: u32,

    /// Radius of the nearby filter in kilometers
    pub nearby_radius_km: f64,
}

pub(crate) fn parse_log_level(value: &str) -> Level {
    match value.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - SLOT_INTERVAL_MINUTES is not a positive integer
    /// - NEARBY_RADIUS_KM is not a positive number
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Storage settings
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let catalog_path = env::var("STUDIO_CATALOG_PATH")
            .unwrap_or_else(|_| "data/studios.json".to_string())
            .into();

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Booking settings
        let slot_interval: u32 = match env::var("SLOT_INTERVAL_MINUTES") {
            Ok(value) => value.parse().wrap_err("Invalid SLOT_INTERVAL_MINUTES value")?,
            Err(_) => DEFAULT_INTERVAL_MINUTES,
        };
        if slot_interval == 0 {
            return Err(eyre!("SLOT_INTERVAL_MINUTES must be positive"));
        }

        let nearby_radius_km: f64 = match env::var("NEARBY_RADIUS_KM") {
            Ok(value) => value.parse().wrap_err("Invalid NEARBY_RADIUS_KM value")?,
            Err(_) => 10.0,
        };
        if !(nearby_radius_km.is_finite() && nearby_radius_km > 0.0) {
            return Err(eyre!("NEARBY_RADIUS_KM must be a positive number"));
        }

        Ok(Self {
            host,
            port,
            database_url,
            catalog_path,
            log_level,
            cors_origins,
            request_timeout,
            slot_interval,
            nearby_radius_km,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
