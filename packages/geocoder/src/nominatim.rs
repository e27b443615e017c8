//! Nominatim / `OpenStreetMap` geocoder client.
//!
//! The public instance allows **1 request per second** maximum; the
//! caller is responsible for staying under that.
//!
//! See <https://nominatim.org/release-docs/develop/api/Search/>

use crate::{GeocodeError, GeocodedPlace};

/// Geocodes a free-form destination query (e.g. a place name or address
/// fragment) and returns the single best match.
///
/// Returns `Ok(None)` when the query matches nothing.
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request or response parsing
/// fails, or [`GeocodeError::RateLimited`] on HTTP 429.
pub async fn geocode_freeform(
    client: &reqwest::Client,
    base_url: &str,
    query: &str,
) -> Result<Option<GeocodedPlace>, GeocodeError> {
    let resp = client
        .get(base_url)
        .query(&[("q", query), ("format", "jsonv2"), ("limit", "1")])
        .send()
        .await?;

    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GeocodeError::RateLimited);
    }

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body)
}

/// Parses a Nominatim search response. Coordinates arrive as strings.
fn parse_response(body: &serde_json::Value) -> Result<Option<GeocodedPlace>, GeocodeError> {
    let results = body.as_array().ok_or_else(|| GeocodeError::Parse {
        message: "Nominatim response is not an array".to_string(),
    })?;

    let Some(first) = results.first() else {
        return Ok(None);
    };

    let latitude = first["lat"]
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing lat in Nominatim response".to_string(),
        })?;

    let longitude = first["lon"]
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing lon in Nominatim response".to_string(),
        })?;

    let display_name = first["display_name"].as_str().map(String::from);

    Ok(Some(GeocodedPlace {
        latitude,
        longitude,
        display_name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nominatim_result() {
        let body = serde_json::json!([{
            "lat": "9.5592",
            "lon": "77.6811",
            "display_name": "Rajapalayam, Virudhunagar, Tamil Nadu, India"
        }]);
        let place = parse_response(&body).unwrap().unwrap();
        assert!((place.latitude - 9.5592).abs() < 1e-4);
        assert!((place.longitude - 77.6811).abs() < 1e-4);
        assert!(place.display_name.unwrap().starts_with("Rajapalayam"));
    }

    #[test]
    fn parses_nominatim_empty() {
        let body = serde_json::json!([]);
        assert!(parse_response(&body).unwrap().is_none());
    }

    #[test]
    fn non_array_body_is_parse_error() {
        let body = serde_json::json!({ "error": "bad request" });
        assert!(matches!(
            parse_response(&body),
            Err(GeocodeError::Parse { .. })
        ));
    }

    #[test]
    fn non_numeric_lat_is_parse_error() {
        let body = serde_json::json!([{ "lat": "not-a-number", "lon": "77.0" }]);
        assert!(matches!(
            parse_response(&body),
            Err(GeocodeError::Parse { .. })
        ));
    }
}
