//! CLI entrypoint for tourmate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tourmate_application::PlanTripUseCase;
use tourmate_domain::Query;
use tourmate_infrastructure::{
    AttractionsClient, ConfigLoader, GeocodingClient, HttpToolExecutor, OpenAiEngine, RequestGate,
    WeatherClient,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Nominatim usage policy: at most one geocoding request per second.
const GEOCODING_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(name = "tourmate", about = "Trip planning assistant", version)]
struct Cli {
    /// The trip-planning question to answer
    question: Option<String>,

    /// Path to a config file (overrides discovered configs)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress the banner, print only the answer
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let question = match cli.question {
        Some(q) => q,
        None => bail!("A question is required, e.g. tourmate \"weather in Bangalore\""),
    };
    let query = Query::new(&question)?;

    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    let api_key = std::env::var(&config.engine.api_key_env).with_context(|| {
        format!(
            "API key not found. Set the {} environment variable.",
            config.engine.api_key_env
        )
    })?;

    info!("Starting tourmate with model {}", config.engine.model);

    // === Dependency Injection ===
    let gate = RequestGate::new(GEOCODING_INTERVAL);
    let geocoding = GeocodingClient::new(&config.lookups.geocoding_url, gate)?;
    let weather = WeatherClient::new(&config.lookups.weather_url)?;
    let attractions = AttractionsClient::new(&config.lookups.attractions_url)?;

    let tools = Arc::new(
        HttpToolExecutor::new(geocoding, weather, attractions)
            .with_radius_meters(config.lookups.radius_meters)
            .with_max_results(config.lookups.max_results),
    );

    let engine = Arc::new(
        OpenAiEngine::new(&config.engine.base_url, api_key, &config.engine.model)?
            .with_temperature(config.engine.temperature),
    );

    let use_case =
        PlanTripUseCase::new(engine, tools).with_max_iterations(config.agent.max_iterations);

    if !cli.quiet {
        println!();
        println!("Question: {}", query);
        println!();
    }

    let result = use_case.execute(&query).await;

    println!("{}", result.output);

    if !result.success {
        if let Some(error) = &result.error {
            eprintln!("Error: {}", error);
        }
        std::process::exit(1);
    }

    Ok(())
}
