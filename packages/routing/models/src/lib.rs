#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Route shapes shared between the routing client, the risk ranker, and
//! the API layer.
//!
//! Routes are created fresh per request from routing-service output and
//! live for a single request/response cycle.

use safe_route_geo::GeoPoint;

/// A single turn-by-turn instruction, passed through unmodified from the
/// routing service. Every field is optional; upstream omits them freely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteStep {
    /// Step length in meters.
    pub distance_m: Option<f64>,
    /// Step travel time in seconds.
    pub duration_s: Option<f64>,
    /// Road name, when the routing service knows it.
    pub road_name: Option<String>,
    /// Human-readable instruction.
    pub instruction: Option<String>,
}

/// A candidate driving route.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Route geometry in travel order.
    pub polyline: Vec<GeoPoint>,
    /// Total length in meters, when known.
    pub distance_m: Option<f64>,
    /// Total travel time in seconds, when known.
    pub duration_s: Option<f64>,
    /// Turn-by-turn steps for the first leg.
    pub steps: Vec<RouteStep>,
}

/// A route annotated with its hazard-proximity risk score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRoute {
    /// The underlying route, unchanged.
    pub route: Route,
    /// Cumulative hazard exposure along the sampled polyline (lower is
    /// safer).
    pub risk_score: u32,
}
