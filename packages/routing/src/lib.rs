#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Routing service client.
//!
//! Fetches candidate driving routes (polyline, distance, duration,
//! turn-by-turn steps) from an OSRM-compatible HTTP API and converts
//! them into the shared route shapes consumed by the risk ranker.

pub mod osrm;

use thiserror::Error;

/// Errors from fetching candidate routes.
#[derive(Debug, Error)]
pub enum RouteError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// The routing service found no route between the endpoints.
    #[error("No route between the requested endpoints")]
    NoRoute,
}
