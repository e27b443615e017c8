#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Hazard taxonomy types.
//!
//! A hazard is a fixed known location that contributes proximity risk to
//! routes passing nearby. The scoring weight lives on [`HazardKind`] so
//! every consumer agrees on how much each kind counts.

use safe_route_geo::GeoPoint;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The kind of incident a hazard location is known for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum HazardKind {
    /// A known accident-prone spot.
    Accident,
    /// A known crime zone.
    Crime,
}

impl HazardKind {
    /// Risk accrued per sampled route point within the proximity
    /// threshold of a hazard of this kind.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Accident => 2,
            Self::Crime => 1,
        }
    }
}

/// A fixed hazard location.
///
/// Serializes flat as `{ name, lat, lon, type }` in both the TOML dataset
/// format and the API. The dataset is owned by the caller and never
/// mutated by the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    /// Display name (e.g. "Accident Spot 3").
    pub name: String,
    /// Where the hazard is.
    #[serde(flatten)]
    pub location: GeoPoint,
    /// What kind of incident this location is known for.
    #[serde(rename = "type")]
    pub kind: HazardKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accident_outweighs_crime() {
        assert_eq!(HazardKind::Accident.weight(), 2);
        assert_eq!(HazardKind::Crime.weight(), 1);
    }

    #[test]
    fn kind_round_trips_through_strings() {
        assert_eq!(HazardKind::Accident.to_string(), "Accident");
        assert_eq!("Crime".parse::<HazardKind>().unwrap(), HazardKind::Crime);
    }
}
