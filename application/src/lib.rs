//! Application layer for tourmate
//!
//! Defines the ports the orchestration loop depends on (the reasoning
//! engine and the capability tools) and the [`PlanTripUseCase`] that drives
//! one query from free text to a final answer. Adapters for the ports live
//! in the infrastructure layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::capability::CapabilityPort;
pub use ports::reasoning_engine::{EngineError, ReasoningEngine};
pub use use_cases::plan_trip::{DEFAULT_MAX_ITERATIONS, PlanTripUseCase};
