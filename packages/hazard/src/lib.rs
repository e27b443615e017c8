#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Hazard dataset registry.
//!
//! The default dataset is defined in a TOML file under `datasets/` and
//! embedded at compile time. Deployments can swap it for a file on disk
//! via [`load_from_path`] without recompiling, and tests can score
//! against synthetic datasets.

use safe_route_hazard_models::Hazard;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors from loading a hazard dataset.
#[derive(Debug, Error)]
pub enum HazardConfigError {
    /// Reading the dataset file failed.
    #[error("Failed to read hazard dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset TOML is malformed.
    #[error("Failed to parse hazard dataset: {0}")]
    Parse(#[from] toml::de::Error),
}

/// TOML document shape: a single `[[hazards]]` array of tables.
#[derive(Debug, Deserialize)]
struct HazardDataset {
    hazards: Vec<Hazard>,
}

// ── Compile-time embedded dataset ───────────────────────────────────

const DEFAULT_DATASET: &str = include_str!("../datasets/default.toml");

#[cfg(test)]
const EXPECTED_DEFAULT_COUNT: usize = 12;

/// Returns the embedded default hazard dataset.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (this is a compile-time
/// guarantee since the dataset is embedded and covered by tests).
#[must_use]
pub fn default_hazards() -> Vec<Hazard> {
    parse_dataset(DEFAULT_DATASET)
        .unwrap_or_else(|e| panic!("Embedded hazard dataset is malformed: {e}"))
}

/// Loads a hazard dataset from a TOML file.
///
/// # Errors
///
/// Returns [`HazardConfigError`] if the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<Vec<Hazard>, HazardConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse_dataset(&contents)
}

fn parse_dataset(toml_str: &str) -> Result<Vec<Hazard>, HazardConfigError> {
    let dataset: HazardDataset = toml::de::from_str(toml_str)?;
    Ok(dataset.hazards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use safe_route_hazard_models::HazardKind;
    use std::collections::BTreeSet;

    #[test]
    fn default_dataset_loads() {
        let hazards = default_hazards();
        assert_eq!(hazards.len(), EXPECTED_DEFAULT_COUNT);
    }

    #[test]
    fn default_dataset_has_both_kinds() {
        let hazards = default_hazards();
        assert!(hazards.iter().any(|h| h.kind == HazardKind::Accident));
        assert!(hazards.iter().any(|h| h.kind == HazardKind::Crime));
    }

    #[test]
    fn default_dataset_names_are_unique_and_non_empty() {
        let hazards = default_hazards();
        let mut seen = BTreeSet::new();
        for hazard in &hazards {
            assert!(!hazard.name.is_empty(), "Hazard has empty name");
            assert!(seen.insert(&hazard.name), "Duplicate hazard: {}", hazard.name);
        }
    }

    #[test]
    fn parses_synthetic_dataset() {
        let toml_str = r#"
            [[hazards]]
            name = "Test Zone"
            lat = 1.5
            lon = -2.5
            type = "Crime"
        "#;
        let hazards = parse_dataset(toml_str).unwrap();
        assert_eq!(hazards.len(), 1);
        assert_eq!(hazards[0].name, "Test Zone");
        assert!((hazards[0].location.lat - 1.5).abs() < f64::EPSILON);
        assert!((hazards[0].location.lon - -2.5).abs() < f64::EPSILON);
        assert_eq!(hazards[0].kind, HazardKind::Crime);
    }

    #[test]
    fn rejects_malformed_dataset() {
        assert!(parse_dataset("[[hazards]]\nname = 42").is_err());
    }

    #[test]
    fn rejects_unknown_kind() {
        let toml_str = r#"
            [[hazards]]
            name = "Test Zone"
            lat = 1.5
            lon = -2.5
            type = "Flood"
        "#;
        assert!(parse_dataset(toml_str).is_err());
    }
}
