//! HTTP clients for the public lookup services.
//!
//! Three read-only services back the capability tools: Nominatim for
//! geocoding, Open-Meteo for current weather, and Overpass for tourist
//! attractions. Each client owns its own `reqwest::Client` and reports
//! failures through [`LookupError`]; translating a failure into user-facing
//! text is the tool executor's job, not the clients'.

pub mod attractions;
pub mod gate;
pub mod geocoding;
pub mod weather;

pub use attractions::AttractionsClient;
pub use gate::RequestGate;
pub use geocoding::GeocodingClient;
pub use weather::WeatherClient;

use thiserror::Error;

/// Failure of a single lookup request.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}
