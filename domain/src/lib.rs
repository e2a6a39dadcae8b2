//! Domain layer for tourmate
//!
//! This crate contains the core business types and logic for answering
//! trip-planning questions. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Capabilities
//!
//! There are exactly two things the assistant can look up, modeled as the
//! closed [`Capability`] enum:
//!
//! - **Weather**: current weather for a place
//! - **Places**: tourist attractions near a place
//!
//! ## Reasoning turns
//!
//! The orchestration loop delegates routing decisions to an external
//! reasoning engine that replies in a Thought/Action/Action Input/Final
//! Answer text format. [`parse_turn`] turns that text into a [`Decision`],
//! and [`ReactPrompt`] renders the prompt for each turn, including the
//! scratchpad built from the [`ReasoningTrace`] so far.

pub mod agent;
pub mod core;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use agent::parser::{ParseError, ParsedTurn, parse_turn};
pub use agent::prompt::ReactPrompt;
pub use agent::trace::{
    Decision, FAILURE_OUTPUT, QueryError, QueryResult, ReasoningTrace, TraceStep,
};
pub use core::place::{Coordinates, ResolvedPlace};
pub use core::query::{EmptyQuery, Query};
pub use tool::capability::Capability;
pub use tool::reply::{ToolReply, WeatherSnapshot};
