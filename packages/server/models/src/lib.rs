#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the safe-route server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the internal route shapes to allow independent
//! evolution of the API contract.

use safe_route_hazard_models::Hazard;
use safe_route_routing_models::{RankedRoute, RouteStep};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// Request body for the route-planning endpoint.
///
/// All fields are optional at the deserialization layer; the handler
/// rejects requests with any of them missing.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteQuery {
    /// Origin latitude.
    pub origin_lat: Option<f64>,
    /// Origin longitude.
    pub origin_lon: Option<f64>,
    /// Free-text destination, resolved via the geocoder.
    pub destination: Option<String>,
}

/// A turn-by-turn step as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ApiStep {
    /// Step length in meters.
    pub distance: Option<f64>,
    /// Step travel time in seconds.
    pub duration: Option<f64>,
    /// Road name.
    pub name: Option<String>,
    /// Human-readable instruction.
    pub instruction: Option<String>,
}

impl From<RouteStep> for ApiStep {
    fn from(step: RouteStep) -> Self {
        Self {
            distance: step.distance_m,
            duration: step.duration_s,
            name: step.road_name,
            instruction: step.instruction,
        }
    }
}

/// A scored route as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ApiRoute {
    /// Route geometry as `[lat, lon]` pairs in travel order.
    pub coordinates: Vec<[f64; 2]>,
    /// Total length in meters.
    pub distance: Option<f64>,
    /// Total travel time in seconds.
    pub duration: Option<f64>,
    /// Cumulative hazard-proximity exposure (lower is safer).
    pub risk_score: u32,
    /// Turn-by-turn steps.
    pub steps: Vec<ApiStep>,
}

impl From<RankedRoute> for ApiRoute {
    fn from(ranked: RankedRoute) -> Self {
        let route = ranked.route;
        Self {
            coordinates: route.polyline.iter().map(|p| [p.lat, p.lon]).collect(),
            distance: route.distance_m,
            duration: route.duration_s,
            risk_score: ranked.risk_score,
            steps: route.steps.into_iter().map(ApiStep::from).collect(),
        }
    }
}

/// Response body for the route-planning endpoint.
///
/// Routes are ordered safest-first; the first entry is the
/// recommendation and the rest are ranked alternatives.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    /// Always `true` for a successful response.
    pub success: bool,
    /// Resolved destination latitude.
    pub dest_lat: f64,
    /// Resolved destination longitude.
    pub dest_lon: f64,
    /// Ranked candidate routes.
    pub routes: Vec<ApiRoute>,
    /// The hazard locations used for scoring.
    pub hazards: Vec<Hazard>,
}

/// Machine-readable error kinds for request-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
pub enum ApiErrorKind {
    /// The request is missing origin coordinates or a destination.
    MissingParameters,
    /// The geocoder found no match for the destination text.
    DestinationNotFound,
    /// The routing service found no route to the destination.
    NoRouteFound,
    /// A collaborator (geocoder or router) failed or was unreachable.
    UpstreamUnavailable,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error kind.
    pub error: ApiErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use safe_route_geo::GeoPoint;
    use safe_route_routing_models::Route;

    #[test]
    fn api_route_preserves_travel_order() {
        let ranked = RankedRoute {
            route: Route {
                polyline: vec![GeoPoint::new(9.5, 77.65), GeoPoint::new(9.6, 77.70)],
                distance_m: Some(5021.4),
                duration_s: Some(612.9),
                steps: vec![RouteStep {
                    distance_m: Some(120.0),
                    duration_s: Some(15.5),
                    road_name: Some("Main Bazaar Road".to_string()),
                    instruction: Some("Head north".to_string()),
                }],
            },
            risk_score: 3,
        };

        let api = ApiRoute::from(ranked);
        assert_eq!(api.coordinates, vec![[9.5, 77.65], [9.6, 77.70]]);
        assert_eq!(api.risk_score, 3);
        assert_eq!(api.steps.len(), 1);
        assert_eq!(api.steps[0].name.as_deref(), Some("Main Bazaar Road"));
    }

    #[test]
    fn error_kinds_have_stable_names() {
        assert_eq!(ApiErrorKind::MissingParameters.to_string(), "MissingParameters");
        assert_eq!(ApiErrorKind::DestinationNotFound.to_string(), "DestinationNotFound");
        assert_eq!(ApiErrorKind::NoRouteFound.to_string(), "NoRouteFound");
        assert_eq!(ApiErrorKind::UpstreamUnavailable.to_string(), "UpstreamUnavailable");
    }
}
