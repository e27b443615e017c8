//! HTTP handler functions for the safe-route API.

use actix_web::{HttpResponse, web};
use safe_route_geo::GeoPoint;
use safe_route_geocoder::nominatim;
use safe_route_risk::rank_routes;
use safe_route_routing::{RouteError, osrm};
use safe_route_server_models::{
    ApiError, ApiErrorKind, ApiHealth, ApiRoute, RouteQuery, RouteResponse,
};

use crate::AppState;

/// Number of alternative routes requested from the routing service.
const MAX_ALTERNATIVES: usize = 2;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/hazards`
///
/// Returns the hazard dataset used for scoring.
pub async fn hazards(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.hazards.as_ref())
}

/// `POST /api/route`
///
/// Resolves the destination, fetches candidate routes, scores them
/// against the hazard dataset, and returns them ranked safest-first.
pub async fn route(state: web::Data<AppState>, body: web::Json<RouteQuery>) -> HttpResponse {
    let query = body.into_inner();

    let (Some(origin_lat), Some(origin_lon)) = (query.origin_lat, query.origin_lon) else {
        return missing_parameters();
    };
    let destination = query.destination.unwrap_or_default();
    if destination.is_empty() {
        return missing_parameters();
    }

    let place =
        match nominatim::geocode_freeform(&state.http, &state.geocoder_url, &destination).await {
            Ok(Some(place)) => place,
            Ok(None) => {
                return HttpResponse::NotFound().json(ApiError {
                    error: ApiErrorKind::DestinationNotFound,
                    message: format!("No match for destination '{destination}'"),
                });
            }
            Err(e) => {
                log::error!("Geocoding failed: {e}");
                return upstream_unavailable("Geocoding service unavailable");
            }
        };

    let origin = GeoPoint::new(origin_lat, origin_lon);
    let dest = GeoPoint::new(place.latitude, place.longitude);

    let routes =
        match osrm::fetch_routes(&state.http, &state.osrm_url, origin, dest, MAX_ALTERNATIVES)
            .await
        {
            Ok(routes) => routes,
            Err(RouteError::NoRoute) => {
                return HttpResponse::NotFound().json(ApiError {
                    error: ApiErrorKind::NoRouteFound,
                    message: "No route found to the destination".to_string(),
                });
            }
            Err(e) => {
                log::error!("Route fetch failed: {e}");
                return upstream_unavailable("Routing service unavailable");
            }
        };

    let ranked = rank_routes(routes, &state.hazards, &state.risk);

    HttpResponse::Ok().json(RouteResponse {
        success: true,
        dest_lat: place.latitude,
        dest_lon: place.longitude,
        routes: ranked.into_iter().map(ApiRoute::from).collect(),
        hazards: state.hazards.as_ref().clone(),
    })
}

fn missing_parameters() -> HttpResponse {
    HttpResponse::BadRequest().json(ApiError {
        error: ApiErrorKind::MissingParameters,
        message: "origin_lat, origin_lon, and destination are required".to_string(),
    })
}

fn upstream_unavailable(message: &str) -> HttpResponse {
    HttpResponse::BadGateway().json(ApiError {
        error: ApiErrorKind::UpstreamUnavailable,
        message: message.to_string(),
    })
}
