//! Nominatim geocoding client.

use super::gate::RequestGate;
use super::LookupError;
use serde::Deserialize;
use std::time::Duration;
use tourmate_domain::{Coordinates, ResolvedPlace};
use tracing::debug;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

const USER_AGENT: &str = "tourmate/0.1 (trip planning assistant)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves free-text place names to coordinates via Nominatim.
///
/// Every request passes through the shared [`RequestGate`] first; Nominatim
/// also requires an identifying User-Agent, which the internal client sets
/// on every request.
pub struct GeocodingClient {
    client: reqwest::Client,
    base_url: String,
    gate: RequestGate,
}

/// One match in a Nominatim search response. Coordinates come back as
/// strings, not numbers.
#[derive(Debug, Deserialize)]
struct NominatimMatch {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

impl GeocodingClient {
    pub fn new(base_url: impl Into<String>, gate: RequestGate) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            gate,
        })
    }

    /// Looks up a place name, returning `Ok(None)` when Nominatim has no
    /// match for it.
    pub async fn resolve(&self, place: &str) -> Result<Option<ResolvedPlace>, LookupError> {
        let place = place.trim();
        if place.is_empty() {
            return Ok(None);
        }

        self.gate.acquire().await;

        let url = format!("{}/search", self.base_url);
        debug!("Geocoding '{}'", place);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", place),
                ("format", "json"),
                ("limit", "1"),
                ("addressdetails", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let matches: Vec<NominatimMatch> = response.json().await?;
        match matches.into_iter().next() {
            Some(m) => Ok(Some(to_resolved_place(m, place)?)),
            None => Ok(None),
        }
    }
}

fn to_resolved_place(m: NominatimMatch, queried: &str) -> Result<ResolvedPlace, LookupError> {
    let lat: f64 = m
        .lat
        .parse()
        .map_err(|_| LookupError::Malformed(format!("non-numeric latitude '{}'", m.lat)))?;
    let lon: f64 = m
        .lon
        .parse()
        .map_err(|_| LookupError::Malformed(format!("non-numeric longitude '{}'", m.lon)))?;
    Ok(ResolvedPlace {
        display_name: m.display_name.unwrap_or_else(|| queried.to_string()),
        coordinates: Coordinates { lat, lon },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_coordinates_from_a_search_payload() {
        let payload = r#"[{
            "lat": "12.9767936",
            "lon": "77.590082",
            "display_name": "Bengaluru, Bangalore North, Karnataka, India"
        }]"#;
        let matches: Vec<NominatimMatch> = serde_json::from_str(payload).unwrap();
        let place = to_resolved_place(matches.into_iter().next().unwrap(), "Bangalore").unwrap();
        assert_eq!(place.coordinates.lat, 12.9767936);
        assert_eq!(place.coordinates.lon, 77.590082);
        assert_eq!(place.short_name(), "Bengaluru");
    }

    #[test]
    fn missing_display_name_falls_back_to_the_query() {
        let m = NominatimMatch {
            lat: "1.5".to_string(),
            lon: "-2.5".to_string(),
            display_name: None,
        };
        let place = to_resolved_place(m, "Somewhere").unwrap();
        assert_eq!(place.display_name, "Somewhere");
    }

    #[test]
    fn non_numeric_coordinates_are_rejected() {
        let m = NominatimMatch {
            lat: "north-ish".to_string(),
            lon: "77.59".to_string(),
            display_name: None,
        };
        assert!(matches!(
            to_resolved_place(m, "Bangalore"),
            Err(LookupError::Malformed(_))
        ));
    }
}
