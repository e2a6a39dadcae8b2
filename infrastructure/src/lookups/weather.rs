//! Open-Meteo current-weather client.

use super::LookupError;
use serde::Deserialize;
use std::time::Duration;
use tourmate_domain::{Coordinates, WeatherSnapshot};
use tracing::debug;

pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches current conditions for a coordinate pair. No API key and no
/// rate-limit gate; Open-Meteo's free tier is generous enough for one
/// request per query.
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
    hourly: Option<HourlyBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    // Hours without data come back as JSON null.
    #[serde(default)]
    precipitation_probability: Vec<Option<u8>>,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub async fn current(&self, at: Coordinates) -> Result<WeatherSnapshot, LookupError> {
        let url = format!("{}/v1/forecast", self.base_url);
        debug!("Fetching weather for {:.4},{:.4}", at.lat, at.lon);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", at.lat.to_string()),
                ("longitude", at.lon.to_string()),
                ("current_weather", "true".to_string()),
                ("hourly", "precipitation_probability".to_string()),
                ("forecast_days", "1".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let payload: ForecastResponse = response.json().await?;
        to_snapshot(payload)
    }
}

fn to_snapshot(payload: ForecastResponse) -> Result<WeatherSnapshot, LookupError> {
    let current = payload
        .current_weather
        .ok_or_else(|| LookupError::Malformed("missing current_weather block".to_string()))?;
    // The hourly series starts at the current hour; the first populated
    // entry is the chance of rain right now.
    let precipitation_probability = payload
        .hourly
        .and_then(|h| h.precipitation_probability.into_iter().flatten().next())
        .unwrap_or(0);
    Ok(WeatherSnapshot {
        temperature: current.temperature,
        precipitation_probability,
        windspeed: current.windspeed,
        weathercode: current.weathercode,
    })
}
