//! Capability tool replies
//!
//! [`ToolReply`] is the tagged result of a tool invocation. The variants
//! replace substring matching on sentinel phrases with an explicit signal,
//! but the `Display` output preserves the exact externally-visible
//! sentences: downstream consumers pattern-match on
//! `"I don't know this place exists: ..."` verbatim.

use crate::tool::capability::Capability;
use serde::{Deserialize, Serialize};

/// Current weather data returned by the weather lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Precipitation probability for the current hour, 0-100.
    pub precipitation_probability: u8,
    /// Wind speed in km/h.
    pub windspeed: f64,
    /// WMO weather condition code.
    pub weathercode: i32,
}

/// Result of invoking a capability tool with a place name.
///
/// Tools never fail past their boundary: transport and payload errors are
/// absorbed by the adapter and surface as one of these variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolReply {
    /// The place name could not be resolved to coordinates.
    PlaceNotFound { place: String },
    /// The place resolved, but the lookup returned no usable data.
    Unavailable {
        capability: Capability,
        place: String,
    },
    /// A formatted one-line answer.
    Report(String),
}

impl ToolReply {
    /// Formats a weather report sentence for a resolved place.
    pub fn weather_report(place: &str, snapshot: &WeatherSnapshot) -> Self {
        ToolReply::Report(format!(
            "In {} it's currently {}°C with a chance of {}% to rain.",
            place, snapshot.temperature, snapshot.precipitation_probability
        ))
    }

    /// Formats an attraction list sentence.
    pub fn attractions_report(names: &[String]) -> Self {
        ToolReply::Report(format!(
            "List of {} places: {}",
            names.len(),
            names.join(", ")
        ))
    }

    /// Whether this reply is the place-not-found sentinel.
    pub fn is_place_not_found(&self) -> bool {
        matches!(self, ToolReply::PlaceNotFound { .. })
    }
}

impl std::fmt::Display for ToolReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolReply::PlaceNotFound { place } => {
                write!(f, "I don't know this place exists: {}", place)
            }
            ToolReply::Unavailable {
                capability: Capability::Weather,
                place,
            } => write!(f, "Could not retrieve weather data for {}", place),
            ToolReply::Unavailable {
                capability: Capability::Places,
                place,
            } => write!(f, "No tourist attractions found in {}", place),
            ToolReply::Report(text) => write!(f, "{}", text),
        }
    }
}
