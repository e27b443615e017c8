#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Destination geocoding for the safe-route system.
//!
//! Resolves free-text destination names to coordinates using the
//! Nominatim / `OpenStreetMap` search API. Nominatim has strict rate
//! limits (1 request per second for the public instance) and requires an
//! identifying `User-Agent`; both are the caller's responsibility.

pub mod nominatim;

use thiserror::Error;

/// A resolved destination.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// The canonical display name returned by the geocoder.
    pub display_name: Option<String>,
}

/// Errors from geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,
}
