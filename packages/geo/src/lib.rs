#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geographic primitives for the safe-route system.
//!
//! Provides the [`GeoPoint`] coordinate type and the haversine
//! great-circle distance used by the risk scoring pipeline. The proximity
//! thresholds downstream are calibrated against this exact formula, so it
//! is implemented here rather than delegated to a geometry crate.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate pair in decimal degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`.
/// Ranges are not enforced; out-of-range or NaN values propagate into
/// meaningless distances rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in decimal degrees.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Haversine great-circle distance between two points, in kilometers.
///
/// Pure and infallible. Returns `0.0` for two identical points; NaN
/// coordinates produce a NaN distance.
#[must_use]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}
