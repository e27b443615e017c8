//! OSRM routing client.
//!
//! Calls the OSRM `route` service for the `driving` profile. The public
//! demo instance at <http://router.project-osrm.org> works without an
//! API key but is best-effort; deployments should point `OSRM_URL` at
//! their own instance.
//!
//! See <https://project-osrm.org/docs/v5.24.0/api/#route-service>

use safe_route_geo::GeoPoint;
use safe_route_routing_models::{Route, RouteStep};

use crate::RouteError;

/// Fetches up to `max_alternatives` candidate routes between two points.
///
/// Requests the full route geometry as `GeoJSON` plus turn-by-turn steps.
/// OSRM decides how many alternatives actually exist; the result is
/// truncated to `max_alternatives` in upstream preference order.
///
/// # Errors
///
/// Returns [`RouteError::NoRoute`] if the service reports no route, and
/// [`RouteError::Http`] / [`RouteError::Parse`] for transport or
/// decoding failures.
pub async fn fetch_routes(
    client: &reqwest::Client,
    base_url: &str,
    origin: GeoPoint,
    destination: GeoPoint,
    max_alternatives: usize,
) -> Result<Vec<Route>, RouteError> {
    // OSRM coordinate order is lon,lat.
    let url = format!(
        "{base_url}/{},{};{},{}",
        origin.lon, origin.lat, destination.lon, destination.lat
    );

    let resp = client
        .get(&url)
        .query(&[
            ("overview", "full"),
            ("geometries", "geojson"),
            ("alternatives", "true"),
            ("steps", "true"),
        ])
        .send()
        .await?;

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body, max_alternatives)
}

/// Parses an OSRM route response.
fn parse_response(
    body: &serde_json::Value,
    max_alternatives: usize,
) -> Result<Vec<Route>, RouteError> {
    let Some(raw_routes) = body["routes"].as_array() else {
        return Err(RouteError::NoRoute);
    };
    if raw_routes.is_empty() {
        return Err(RouteError::NoRoute);
    }

    raw_routes
        .iter()
        .take(max_alternatives)
        .map(parse_route)
        .collect()
}

/// Parses a single OSRM route, flipping `GeoJSON` `[lon, lat]` pairs into
/// [`GeoPoint`] travel order.
fn parse_route(raw: &serde_json::Value) -> Result<Route, RouteError> {
    let coords = raw["geometry"]["coordinates"]
        .as_array()
        .ok_or_else(|| RouteError::Parse {
            message: "Missing geometry coordinates in OSRM route".to_string(),
        })?;

    let mut polyline = Vec::with_capacity(coords.len());
    for pair in coords {
        let lon = pair[0].as_f64().ok_or_else(|| RouteError::Parse {
            message: "Non-numeric longitude in OSRM geometry".to_string(),
        })?;
        let lat = pair[1].as_f64().ok_or_else(|| RouteError::Parse {
            message: "Non-numeric latitude in OSRM geometry".to_string(),
        })?;
        polyline.push(GeoPoint::new(lat, lon));
    }

    // Steps come from the first leg only; a single origin->destination
    // request has exactly one leg.
    let steps = raw["legs"][0]["steps"]
        .as_array()
        .map(|steps| steps.iter().map(parse_step).collect())
        .unwrap_or_default();

    Ok(Route {
        polyline,
        distance_m: raw["distance"].as_f64(),
        duration_s: raw["duration"].as_f64(),
        steps,
    })
}

fn parse_step(raw: &serde_json::Value) -> RouteStep {
    // OSRM only fills maneuver.instruction when a localization layer is
    // configured; the bare maneuver type is the fallback.
    let instruction = raw["maneuver"]["instruction"]
        .as_str()
        .or_else(|| raw["maneuver"]["type"].as_str())
        .map(String::from);

    RouteStep {
        distance_m: raw["distance"].as_f64(),
        duration_s: raw["duration"].as_f64(),
        road_name: raw["name"].as_str().map(String::from),
        instruction,
    }
}
