//! Infrastructure layer for tourmate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod engine;
pub mod lookups;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, FileAgentConfig, FileConfig, FileEngineConfig, FileLookupConfig};
pub use engine::OpenAiEngine;
pub use lookups::{
    AttractionsClient, GeocodingClient, LookupError, RequestGate, WeatherClient,
};
pub use tools::HttpToolExecutor;
