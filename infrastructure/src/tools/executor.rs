//! HTTP-backed implementation of the capability port.

use async_trait::async_trait;
use tourmate_application::CapabilityPort;
use tourmate_domain::{Capability, ResolvedPlace, ToolReply, WeatherSnapshot};
use tracing::warn;

use crate::lookups::{AttractionsClient, GeocodingClient, LookupError, WeatherClient};

const DEFAULT_RADIUS_METERS: u32 = 5000;
const DEFAULT_MAX_RESULTS: usize = 5;

/// Executes capability tools against the real lookup services.
///
/// Both capabilities share the geocoding step: the place name is resolved
/// first, and any failure to resolve it, whether a genuine miss or a
/// transport error, surfaces as the place-not-found reply. The reasoning
/// loop treats that reply as final, so this type never returns an error;
/// every outcome is a [`ToolReply`] the loop can hand to the user.
pub struct HttpToolExecutor {
    geocoding: GeocodingClient,
    weather: WeatherClient,
    attractions: AttractionsClient,
    radius_meters: u32,
    max_results: usize,
}

impl HttpToolExecutor {
    pub fn new(
        geocoding: GeocodingClient,
        weather: WeatherClient,
        attractions: AttractionsClient,
    ) -> Self {
        Self {
            geocoding,
            weather,
            attractions,
            radius_meters: DEFAULT_RADIUS_METERS,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Search radius for the attractions lookup, in meters.
    pub fn with_radius_meters(mut self, radius_meters: u32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    /// Cap on the number of attractions reported.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

#[async_trait]
impl CapabilityPort for HttpToolExecutor {
    async fn invoke(&self, capability: Capability, place: &str) -> ToolReply {
        let resolution = self.geocoding.resolve(place).await;
        let Some(resolved) = resolved_place(place, resolution) else {
            return ToolReply::PlaceNotFound {
                place: place.to_string(),
            };
        };

        match capability {
            Capability::Weather => {
                let outcome = self.weather.current(resolved.coordinates).await;
                weather_reply(&resolved, place, outcome)
            }
            Capability::Places => {
                let outcome = self
                    .attractions
                    .nearby(resolved.coordinates, self.radius_meters, self.max_results)
                    .await;
                attractions_reply(place, outcome)
            }
        }
    }
}

/// A transport error during resolution counts as a miss, same as an empty
/// match list.
fn resolved_place(
    place: &str,
    outcome: Result<Option<ResolvedPlace>, LookupError>,
) -> Option<ResolvedPlace> {
    match outcome {
        Ok(resolved) => resolved,
        Err(e) => {
            warn!("Geocoding '{}' failed: {}", place, e);
            None
        }
    }
}

fn weather_reply(
    resolved: &ResolvedPlace,
    queried: &str,
    outcome: Result<WeatherSnapshot, LookupError>,
) -> ToolReply {
    match outcome {
        Ok(snapshot) => ToolReply::weather_report(resolved.short_name(), &snapshot),
        Err(e) => {
            warn!("Weather lookup for '{}' failed: {}", queried, e);
            ToolReply::Unavailable {
                capability: Capability::Weather,
                place: queried.to_string(),
            }
        }
    }
}

fn attractions_reply(queried: &str, outcome: Result<Vec<String>, LookupError>) -> ToolReply {
    match outcome {
        Ok(names) if !names.is_empty() => ToolReply::attractions_report(&names),
        Ok(_) => ToolReply::Unavailable {
            capability: Capability::Places,
            place: queried.to_string(),
        },
        Err(e) => {
            warn!("Attractions lookup for '{}' failed: {}", queried, e);
            ToolReply::Unavailable {
                capability: Capability::Places,
                place: queried.to_string(),
            }
        }
    }
}
