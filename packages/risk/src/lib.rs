#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Hazard-proximity risk scoring and route ranking.
//!
//! Each candidate route's polyline is subsampled (every
//! [`DEFAULT_SAMPLE_STRIDE`]th point, starting at index 0) and every
//! sampled point is checked against every hazard. A sample within
//! [`DEFAULT_PROXIMITY_KM`] of a hazard accrues that hazard kind's weight
//! to the route's risk score. Routes are then ordered ascending by
//! `(risk_score, duration, distance)`.
//!
//! Subsampling bounds the cost: dense polylines run to hundreds of
//! points, and full evaluation would be O(points × hazards) per route.
//! The stride and threshold are tunable per call via [`RiskConfig`], but
//! the defaults must stay fixed to keep scores comparable with
//! previously recorded results.
//!
//! Everything in this crate is pure; each call owns its inputs and there
//! is no shared state, so concurrent requests can rank independently.

use safe_route_geo::distance_km;
use safe_route_hazard_models::Hazard;
use safe_route_routing_models::{RankedRoute, Route};

/// Default polyline subsampling stride (scores indices 0, 25, 50, ...).
pub const DEFAULT_SAMPLE_STRIDE: usize = 25;

/// Default hazard proximity threshold in kilometers (300 m).
pub const DEFAULT_PROXIMITY_KM: f64 = 0.3;

/// Tuning knobs for risk scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskConfig {
    /// Every `sample_stride`th polyline point is scored. A stride of 0
    /// is treated as 1 (score every point).
    pub sample_stride: usize,
    /// Samples within this many kilometers of a hazard accrue risk.
    pub proximity_km: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            proximity_km: DEFAULT_PROXIMITY_KM,
        }
    }
}

/// Computes the cumulative hazard exposure for a single route.
///
/// Accrual is additive across every (sample, hazard) pair within the
/// threshold: a route passing several hazards, or holding near one
/// hazard across several sampled points, accrues each occurrence.
/// NaN distances never satisfy the threshold and contribute nothing.
#[must_use]
pub fn score_route(route: &Route, hazards: &[Hazard], config: &RiskConfig) -> u32 {
    let stride = config.sample_stride.max(1);

    let mut risk = 0;
    for point in route.polyline.iter().step_by(stride) {
        for hazard in hazards {
            if distance_km(*point, hazard.location) <= config.proximity_km {
                risk += hazard.kind.weight();
            }
        }
    }
    risk
}

/// Scores every route and returns them ordered safest-first.
///
/// Ordering is ascending by `(risk_score, duration, distance)`: risk is
/// the primary key, shorter duration breaks risk ties, shorter distance
/// breaks duration ties. A missing duration or distance compares as 0,
/// and NaN compares after every finite value. The sort is stable, so
/// fully tied routes keep their input order.
///
/// An empty route list yields an empty ranked list; an empty hazard list
/// is legal and scores every route 0.
#[must_use]
pub fn rank_routes(routes: Vec<Route>, hazards: &[Hazard], config: &RiskConfig) -> Vec<RankedRoute> {
    let mut ranked: Vec<RankedRoute> = routes
        .into_iter()
        .map(|route| {
            let risk_score = score_route(&route, hazards, config);
            RankedRoute { route, risk_score }
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.risk_score
            .cmp(&b.risk_score)
            .then_with(|| sort_key(a.route.duration_s).total_cmp(&sort_key(b.route.duration_s)))
            .then_with(|| sort_key(a.route.distance_m).total_cmp(&sort_key(b.route.distance_m)))
    });

    ranked
}

/// Missing values compare as 0. NaN passes through to `total_cmp`, which
/// orders it after every finite value.
fn sort_key(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}
