//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; defaults point at the public service
//! endpoints.

use serde::{Deserialize, Serialize};

use crate::engine;
use crate::lookups::{attractions, geocoding, weather};

/// Raw reasoning engine configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    /// Chat model name
    pub model: String,
    /// OpenAI-compatible API base URL
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Sampling temperature
    pub temperature: f64,
}

impl Default for FileEngineConfig {
    fn default() -> Self {
        Self {
            model: engine::openai::DEFAULT_MODEL.to_string(),
            base_url: engine::openai::OPENAI_URL.to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: 0.0,
        }
    }
}

/// Raw lookup service configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLookupConfig {
    /// Nominatim base URL
    pub geocoding_url: String,
    /// Open-Meteo base URL
    pub weather_url: String,
    /// Overpass base URL
    pub attractions_url: String,
    /// Attraction search radius in meters
    pub radius_meters: u32,
    /// Maximum attractions to report
    pub max_results: usize,
}

impl Default for FileLookupConfig {
    fn default() -> Self {
        Self {
            geocoding_url: geocoding::NOMINATIM_URL.to_string(),
            weather_url: weather::OPEN_METEO_URL.to_string(),
            attractions_url: attractions::OVERPASS_URL.to_string(),
            radius_meters: 5000,
            max_results: 5,
        }
    }
}

/// Raw agent configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Cap on reasoning iterations per query
    pub max_iterations: usize,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        Self { max_iterations: 5 }
    }
}

/// Complete raw configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub engine: FileEngineConfig,
    pub lookups: FileLookupConfig,
    pub agent: FileAgentConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_public_endpoints() {
        let config = FileConfig::default();
        assert_eq!(config.engine.model, "gpt-3.5-turbo");
        assert_eq!(config.engine.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.engine.temperature, 0.0);
        assert!(config.lookups.geocoding_url.contains("nominatim"));
        assert!(config.lookups.weather_url.contains("open-meteo"));
        assert!(config.lookups.attractions_url.contains("overpass"));
        assert_eq!(config.lookups.radius_meters, 5000);
        assert_eq!(config.lookups.max_results, 5);
        assert_eq!(config.agent.max_iterations, 5);
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let config: FileConfig = toml::from_str(
            r#"
            [engine]
            model = "gpt-4o-mini"

            [agent]
            max_iterations = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.model, "gpt-4o-mini");
        assert_eq!(config.engine.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.agent.max_iterations, 8);
        assert_eq!(config.lookups.max_results, 5);
    }
}
