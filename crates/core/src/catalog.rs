//! # Studio Catalog
//!
//! Read-only view over the studio fixture. The fixture is a JSON document of
//! the form `{ "Studios": [ ... ] }` with PascalCase fields, loaded once at
//! startup and never written back.

use std::{collections::HashSet, fs, path::Path};

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::models::studio::{Coordinates, Studio};

/// Radius used by the "nearby" filter when the caller does not pick one.
pub const DEFAULT_NEARBY_RADIUS_METERS: f64 = 10_000.0;

const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudioCatalog {
    #[serde(rename = "Studios")]
    studios: Vec<Studio>,
}

impl StudioCatalog {
    pub fn new(studios: Vec<Studio>) -> Self {
        Self { studios }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("Studio catalog is not valid JSON")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read studio catalog {}", path.display()))?;
        Self::from_json_str(&json)
            .wrap_err_with(|| format!("Failed to parse studio catalog {}", path.display()))
    }

    pub fn studios(&self) -> &[Studio] {
        &self.studios
    }

    pub fn get(&self, id: u32) -> Option<&Studio> {
        self.studios.iter().find(|studio| studio.id == id)
    }

    /// Studios whose name or area contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Studio> {
        let needle = query.to_lowercase();
        self.studios
            .iter()
            .filter(|studio| {
                studio.name.to_lowercase().contains(&needle)
                    || studio.location.area.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Distinct areas in catalog order, for location autocompletion.
    pub fn area_suggestions(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.studios
            .iter()
            .map(|studio| studio.location.area.clone())
            .filter(|area| seen.insert(area.clone()))
            .collect()
    }
}

/// Great-circle distance between two points, in meters.
pub fn distance_meters(from: Coordinates, to: Coordinates) -> f64 {
    let (lat1, lat2) = (from.latitude.to_radians(), to.latitude.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * a.sqrt().asin()
}

/// Keeps the studios within `radius_meters` of `origin`.
pub fn within_radius<'a>(
    studios: Vec<&'a Studio>,
    origin: Coordinates,
    radius_meters: f64,
) -> Vec<&'a Studio> {
    studios
        .into_iter()
        .filter(|studio| distance_meters(origin, studio.location.coordinates) <= radius_meters)
        .collect()
}
