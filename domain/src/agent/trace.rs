//! Reasoning trace and query result value objects

use crate::tool::capability::Capability;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the reasoning engine decided to do on one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Invoke a capability tool with a bare place name.
    Act {
        capability: Capability,
        input: String,
    },
    /// Stop and answer the user.
    Finish { answer: String },
}

/// One completed reasoning step: the engine acted and observed a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    /// The engine's reasoning before acting.
    pub thought: String,
    /// Which tool was invoked.
    pub capability: Capability,
    /// The place-name argument the engine extracted.
    pub input: String,
    /// The tool's reply, as shown back to the engine.
    pub observation: String,
}

/// Ordered, append-only record of the steps taken for one query.
///
/// Owned by the orchestration loop for the duration of a single query and
/// discarded afterwards; no state survives across queries.
#[derive(Debug, Clone, Default)]
pub struct ReasoningTrace {
    steps: Vec<TraceStep>,
}

impl ReasoningTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// How many times a given capability was invoked.
    pub fn invocations(&self, capability: Capability) -> usize {
        self.steps
            .iter()
            .filter(|s| s.capability == capability)
            .count()
    }
}

/// Canned user-facing text for structured failures. The calling service may
/// replace it with its own fallback content.
pub const FAILURE_OUTPUT: &str = "Sorry, I encountered an error processing your request.";

/// Why a query failed structurally.
///
/// Tool-level problems (unknown place, unavailable lookup) are not failures;
/// they surface as sentinel sentences in a successful result.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryError {
    /// The loop did not converge to a final answer within the iteration cap.
    #[error("Reasoning did not converge within the iteration budget")]
    IterationBudgetExceeded,

    /// The reasoning engine was unreachable, rate-limited, or rejected
    /// the request.
    #[error("Reasoning engine unavailable: {0}")]
    EngineUnavailable(String),
}

/// Terminal result of processing one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub success: bool,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<QueryError>,
}

impl QueryResult {
    /// A successful result carrying the final answer.
    pub fn answered(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: None,
        }
    }

    /// A structured failure. The caller decides on fallback content.
    pub fn failed(error: QueryError) -> Self {
        Self {
            success: false,
            output: FAILURE_OUTPUT.to_string(),
            error: Some(error),
        }
    }
}
