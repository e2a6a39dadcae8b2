//! Resolved place value objects

use serde::{Deserialize, Serialize};

/// Geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A place name resolved to coordinates by the geocoding lookup.
///
/// Resolution happens once per tool invocation; results are not cached
/// across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    /// Canonical display name from the geocoder
    /// (e.g. "Bengaluru, Karnataka, India").
    pub display_name: String,
    /// Resolved coordinates.
    pub coordinates: Coordinates,
}

impl ResolvedPlace {
    pub fn new(display_name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            display_name: display_name.into(),
            coordinates,
        }
    }

    /// The main place name: the first comma-separated segment of the
    /// display name. Used when composing user-facing sentences.
    pub fn short_name(&self) -> &str {
        self.display_name
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or(&self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_takes_first_segment() {
        let place = ResolvedPlace::new(
            "Bengaluru, Bangalore North, Karnataka, India",
            Coordinates::new(12.9716, 77.5946),
        );
        assert_eq!(place.short_name(), "Bengaluru");
    }

    #[test]
    fn short_name_without_commas_is_whole_name() {
        let place = ResolvedPlace::new("Paris", Coordinates::new(48.85, 2.35));
        assert_eq!(place.short_name(), "Paris");
    }
}
