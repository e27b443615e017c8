#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the safe-route application.
//!
//! Accepts an origin coordinate and a free-text destination, resolves
//! the destination via Nominatim, fetches up to two alternative driving
//! routes from OSRM, ranks them by hazard-proximity risk, and returns
//! the ranked routes as JSON. Also serves the static frontend.

mod handlers;
pub mod interactive;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use safe_route_hazard_models::Hazard;
use safe_route_risk::RiskConfig;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Default Nominatim search endpoint.
const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Default OSRM route endpoint (driving profile).
const DEFAULT_OSRM_URL: &str = "http://router.project-osrm.org/route/v1/driving";

/// Shared application state.
///
/// Handlers are stateless; the collaborators they need (HTTP client,
/// geocoder and router endpoints, hazard dataset, risk tuning) are all
/// injected here.
pub struct AppState {
    /// HTTP client shared by the geocoding and routing collaborators.
    pub http: reqwest::Client,
    /// Nominatim search base URL.
    pub geocoder_url: String,
    /// OSRM route base URL.
    pub osrm_url: String,
    /// The hazard dataset used for scoring.
    pub hazards: Arc<Vec<Hazard>>,
    /// Risk scoring configuration.
    pub risk: RiskConfig,
}

/// Starts the safe-route API server.
///
/// Loads the hazard dataset (from `HAZARDS_PATH` if set, otherwise the
/// embedded default), reads collaborator URLs and risk tuning from the
/// environment, and starts the Actix-Web HTTP server. This is a regular
/// async function — the caller is responsible for providing the async
/// runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
///
/// # Panics
///
/// Panics if a configured hazard dataset file cannot be loaded or the
/// HTTP client cannot be constructed.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let hazards = match std::env::var("HAZARDS_PATH") {
        Ok(path) => safe_route_hazard::load_from_path(Path::new(&path))
            .expect("Failed to load hazard dataset"),
        Err(_) => safe_route_hazard::default_hazards(),
    };
    log::info!("Loaded {} hazard locations", hazards.len());

    let geocoder_url =
        std::env::var("GEOCODER_URL").unwrap_or_else(|_| DEFAULT_GEOCODER_URL.to_string());
    let osrm_url = std::env::var("OSRM_URL").unwrap_or_else(|_| DEFAULT_OSRM_URL.to_string());

    let risk = RiskConfig {
        sample_stride: env_parse("RISK_SAMPLE_STRIDE", safe_route_risk::DEFAULT_SAMPLE_STRIDE),
        proximity_km: env_parse("RISK_PROXIMITY_KM", safe_route_risk::DEFAULT_PROXIMITY_KM),
    };

    // Nominatim's usage policy requires an identifying User-Agent.
    let http = reqwest::Client::builder()
        .user_agent(concat!("safe-route/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client");

    let state = web::Data::new(AppState {
        http,
        geocoder_url,
        osrm_url,
        hazards: Arc::new(hazards),
        risk,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/hazards", web::get().to(handlers::hazards))
                    .route("/route", web::post().to(handlers::route)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}

/// Reads an environment variable and parses it, falling back to
/// `default` when unset or unparseable.
fn env_parse<T: FromStr>(var: &str, default: T) -> T {
    std::env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
