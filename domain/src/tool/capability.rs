//! The closed set of capability tools
//!
//! There are exactly two capabilities and no indication of more, so they
//! are a tagged enum dispatched by `match` rather than an extensible
//! registry.

use serde::{Deserialize, Serialize};

/// A capability the orchestration loop can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Current weather for a place.
    Weather,
    /// Tourist attractions near a place.
    Places,
}

impl Capability {
    /// All capabilities, in catalog order.
    pub const ALL: [Capability; 2] = [Capability::Weather, Capability::Places];

    /// The tool name the reasoning engine uses to select this capability.
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Weather => "WeatherTool",
            Capability::Places => "PlacesTool",
        }
    }

    /// Free-text description shown to the reasoning engine.
    pub fn description(&self) -> &'static str {
        match self {
            Capability::Weather => {
                "Useful for getting current weather information for a location. \
                 Input should be a place name (e.g., 'Bangalore', 'Paris'). \
                 Returns temperature and precipitation probability."
            }
            Capability::Places => {
                "Useful for getting tourist attractions and places to visit in a location. \
                 Input should be a place name (e.g., 'Bangalore', 'Paris'). \
                 Returns a list of up to 5 tourist attractions."
            }
        }
    }

    /// Resolve a tool name produced by the reasoning engine.
    ///
    /// Tolerates surrounding whitespace and case differences, since models
    /// do not always echo names exactly.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// One line per tool, for the prompt's tool catalog.
    pub fn catalog() -> String {
        Self::ALL
            .iter()
            .map(|c| format!("{}: {}", c.name(), c.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Comma-separated tool names, for the prompt's format section.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
