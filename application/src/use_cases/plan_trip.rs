//! Plan Trip use case — the query-routing and tool-orchestration loop.
//!
//! Runs a bounded reason/act/observe loop for one query: render the prompt
//! (query + tool catalog + scratchpad), ask the reasoning engine for a
//! turn, parse it, and either invoke a capability tool and feed the
//! observation back, or stop with a final answer.
//!
//! Termination:
//! - the engine produces a final answer, or
//! - a tool reports the place does not exist (the sentinel sentence becomes
//!   the final answer verbatim), or
//! - the iteration budget is exhausted, or
//! - the engine transport fails (no retry here; fallback policy belongs to
//!   the calling service).
//!
//! A malformed engine turn is not fatal: the parse error is fed back as an
//! observation on the next prompt, but the malformed turn still counts
//! against the iteration budget.

use crate::ports::capability::CapabilityPort;
use crate::ports::reasoning_engine::ReasoningEngine;
use std::sync::Arc;
use tourmate_domain::util::truncate_str;
use tourmate_domain::{
    Decision, Query, QueryError, QueryResult, ReactPrompt, ReasoningTrace, TraceStep, parse_turn,
};
use tracing::{debug, info, warn};

/// Default cap on reasoning iterations per query.
pub const DEFAULT_MAX_ITERATIONS: usize = 5;

/// Use case for answering one trip-planning query.
///
/// Owns nothing across queries: each call to [`execute()`](Self::execute)
/// builds its own [`ReasoningTrace`] and discards it with the result.
pub struct PlanTripUseCase {
    engine: Arc<dyn ReasoningEngine>,
    tools: Arc<dyn CapabilityPort>,
    max_iterations: usize,
}

impl PlanTripUseCase {
    pub fn new(engine: Arc<dyn ReasoningEngine>, tools: Arc<dyn CapabilityPort>) -> Self {
        Self {
            engine,
            tools,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Override the iteration cap (builder pattern).
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Process one query to completion, failure, or the iteration cap.
    ///
    /// This is the sole public entry point of the core; the surrounding
    /// HTTP/CLI layer needs nothing else.
    pub async fn execute(&self, query: &Query) -> QueryResult {
        info!("Processing query: {}", truncate_str(query.as_str(), 100));

        let mut trace = ReasoningTrace::new();
        let mut feedback: Option<String> = None;

        for iteration in 1..=self.max_iterations {
            let prompt = ReactPrompt::render(query.as_str(), &trace, feedback.take().as_deref());

            let raw = match self.engine.decide(&prompt).await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Reasoning engine failed on iteration {}: {}", iteration, e);
                    return QueryResult::failed(QueryError::EngineUnavailable(e.to_string()));
                }
            };

            let turn = match parse_turn(&raw) {
                Ok(turn) => turn,
                Err(e) => {
                    warn!("Unparseable turn on iteration {}: {}", iteration, e);
                    feedback = Some(format!(
                        "Invalid response format: {}. Reply with either an Action and \
                         Action Input pair, or a Final Answer.",
                        e
                    ));
                    continue;
                }
            };

            match turn.decision {
                Decision::Finish { answer } => {
                    info!("Final answer after {} tool call(s)", trace.len());
                    return QueryResult::answered(answer);
                }
                Decision::Act { capability, input } => {
                    debug!(
                        "Iteration {}: invoking {} with '{}'",
                        iteration, capability, input
                    );
                    let reply = self.tools.invoke(capability, &input).await;

                    // An unknown place ends the query immediately; the
                    // sentinel sentence passes through unmodified.
                    if reply.is_place_not_found() {
                        info!("Place not resolved, answering with the sentinel");
                        return QueryResult::answered(reply.to_string());
                    }

                    trace.push(TraceStep {
                        thought: turn.thought,
                        capability,
                        input,
                        observation: reply.to_string(),
                    });
                }
            }
        }

        warn!(
            "No final answer within {} iterations ({} tool call(s) made)",
            self.max_iterations,
            trace.len()
        );
        QueryResult::failed(QueryError::IterationBudgetExceeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::reasoning_engine::EngineError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tourmate_domain::{Capability, ToolReply, WeatherSnapshot};

    /// Engine double that replays a fixed script of turns and records the
    /// prompts it was given.
    struct ScriptedEngine {
        turns: Mutex<VecDeque<Result<String, EngineError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedEngine {
        fn new(turns: Vec<Result<String, EngineError>>) -> Self {
            Self {
                turns: Mutex::new(turns.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }

        fn prompt(&self, index: usize) -> String {
            self.prompts.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl ReasoningEngine for ScriptedEngine {
        async fn decide(&self, prompt: &str) -> Result<String, EngineError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.turns
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(EngineError::RequestFailed("script exhausted".into())))
        }
    }

    /// Tool double with fixed replies and a call log.
    struct FixedTools {
        weather: ToolReply,
        places: ToolReply,
        calls: Mutex<Vec<(Capability, String)>>,
    }

    impl FixedTools {
        fn bangalore() -> Self {
            let snapshot = WeatherSnapshot {
                temperature: 24.0,
                precipitation_probability: 35,
                windspeed: 9.4,
                weathercode: 2,
            };
            let attractions = [
                "Lalbagh Botanical Garden",
                "Cubbon Park",
                "Bangalore Palace",
                "Vidhana Soudha",
                "ISKCON Temple",
            ]
            .map(String::from);
            Self {
                weather: ToolReply::weather_report("Bengaluru", &snapshot),
                places: ToolReply::attractions_report(&attractions),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn not_found() -> Self {
            let reply = ToolReply::PlaceNotFound {
                place: "InvalidCity123".to_string(),
            };
            Self {
                weather: reply.clone(),
                places: reply,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(Capability, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CapabilityPort for FixedTools {
        async fn invoke(&self, capability: Capability, place: &str) -> ToolReply {
            self.calls
                .lock()
                .unwrap()
                .push((capability, place.to_string()));
            match capability {
                Capability::Weather => self.weather.clone(),
                Capability::Places => self.places.clone(),
            }
        }
    }

    fn act(tool: &str, input: &str) -> Result<String, EngineError> {
        Ok(format!(
            "I should use the tool.\nAction: {}\nAction Input: {}",
            tool, input
        ))
    }

    fn finish(answer: &str) -> Result<String, EngineError> {
        Ok(format!("I now know the final answer\nFinal Answer: {}", answer))
    }

    #[tokio::test]
    async fn weather_only_query_invokes_weather_tool_once() {
        let engine = Arc::new(ScriptedEngine::new(vec![
            act("WeatherTool", "Bangalore"),
            finish("In Bengaluru it's currently 24°C with a chance of 35% to rain."),
        ]));
        let tools = Arc::new(FixedTools::bangalore());
        let use_case = PlanTripUseCase::new(engine.clone(), tools.clone());

        let query = Query::new("weather in Bangalore").unwrap();
        let result = use_case.execute(&query).await;

        assert!(result.success);
        assert!(result.output.contains("24°C"));
        assert!(result.output.contains("35%"));
        assert_eq!(
            tools.calls(),
            vec![(Capability::Weather, "Bangalore".to_string())]
        );
    }

    #[tokio::test]
    async fn both_intents_invoke_each_tool_once_before_answering() {
        let engine = Arc::new(ScriptedEngine::new(vec![
            act("WeatherTool", "Bangalore"),
            act("PlacesTool", "Bangalore"),
            finish(
                "In Bengaluru it's 24°C with a 35% chance of rain, and you could visit \
                 Lalbagh Botanical Garden, Cubbon Park, Bangalore Palace, Vidhana Soudha \
                 and the ISKCON Temple.",
            ),
        ]));
        let tools = Arc::new(FixedTools::bangalore());
        let use_case = PlanTripUseCase::new(engine.clone(), tools.clone());

        let query = Query::new("weather and places in Bangalore").unwrap();
        let result = use_case.execute(&query).await;

        assert!(result.success);
        assert!(result.output.contains("24°C"));
        assert!(result.output.contains("Cubbon Park"));
        let calls = tools.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls.iter().filter(|(c, _)| *c == Capability::Weather).count(),
            1
        );
        assert_eq!(
            calls.iter().filter(|(c, _)| *c == Capability::Places).count(),
            1
        );
    }

    #[tokio::test]
    async fn places_query_lists_five_attractions() {
        let engine = Arc::new(ScriptedEngine::new(vec![
            act("PlacesTool", "Bangalore"),
            finish(
                "List of 5 places: Lalbagh Botanical Garden, Cubbon Park, Bangalore Palace, \
                 Vidhana Soudha, ISKCON Temple",
            ),
        ]));
        let tools = Arc::new(FixedTools::bangalore());
        let use_case = PlanTripUseCase::new(engine, tools.clone());

        let query = Query::new("places to visit in Bangalore").unwrap();
        let result = use_case.execute(&query).await;

        assert!(result.success);
        assert!(result.output.starts_with("List of 5 places:"));
        assert_eq!(tools.calls().len(), 1);
    }

    #[tokio::test]
    async fn unknown_place_short_circuits_with_the_exact_sentinel() {
        let engine = Arc::new(ScriptedEngine::new(vec![act(
            "WeatherTool",
            "InvalidCity123",
        )]));
        let tools = Arc::new(FixedTools::not_found());
        let use_case = PlanTripUseCase::new(engine.clone(), tools);

        let query = Query::new("I'm going to InvalidCity123").unwrap();
        let result = use_case.execute(&query).await;

        assert!(result.success);
        assert_eq!(
            result.output,
            "I don't know this place exists: InvalidCity123"
        );
        // The engine is not consulted again after the sentinel.
        assert_eq!(engine.calls(), 1);
    }

    #[tokio::test]
    async fn malformed_turns_exhaust_the_iteration_budget() {
        let garbage: Vec<Result<String, EngineError>> = (0..6)
            .map(|i| Ok(format!("rambling with no structure, take {}", i)))
            .collect();
        let engine = Arc::new(ScriptedEngine::new(garbage));
        let tools = Arc::new(FixedTools::bangalore());
        let use_case = PlanTripUseCase::new(engine.clone(), tools.clone());

        let query = Query::new("weather in Bangalore").unwrap();
        let result = use_case.execute(&query).await;

        assert!(!result.success);
        assert_eq!(result.error, Some(QueryError::IterationBudgetExceeded));
        assert_eq!(engine.calls(), DEFAULT_MAX_ITERATIONS);
        assert!(tools.calls().is_empty());
    }

    #[tokio::test]
    async fn parse_error_feedback_reaches_the_next_prompt() {
        let engine = Arc::new(ScriptedEngine::new(vec![
            Ok("no structure here".to_string()),
            finish("Bangalore is lovely this time of year."),
        ]));
        let tools = Arc::new(FixedTools::bangalore());
        let use_case = PlanTripUseCase::new(engine.clone(), tools);

        let query = Query::new("tell me about Bangalore").unwrap();
        let result = use_case.execute(&query).await;

        assert!(result.success);
        assert_eq!(engine.calls(), 2);
        assert!(!engine.prompt(0).contains("Invalid response format"));
        assert!(engine.prompt(1).contains("Invalid response format"));
    }

    #[tokio::test]
    async fn observations_are_replayed_in_the_next_prompt() {
        let engine = Arc::new(ScriptedEngine::new(vec![
            act("PlacesTool", "Bangalore"),
            finish("See the list above."),
        ]));
        let tools = Arc::new(FixedTools::bangalore());
        let use_case = PlanTripUseCase::new(engine.clone(), tools);

        let query = Query::new("places to visit in Bangalore").unwrap();
        use_case.execute(&query).await;

        assert!(engine.prompt(1).contains("Observation: List of 5 places:"));
    }

    #[tokio::test]
    async fn engine_transport_failure_is_a_structured_failure() {
        let engine = Arc::new(ScriptedEngine::new(vec![Err(EngineError::RateLimited(
            "quota exceeded".to_string(),
        ))]));
        let tools = Arc::new(FixedTools::bangalore());
        let use_case = PlanTripUseCase::new(engine.clone(), tools.clone());

        let query = Query::new("weather in Bangalore").unwrap();
        let result = use_case.execute(&query).await;

        assert!(!result.success);
        match result.error {
            Some(QueryError::EngineUnavailable(detail)) => {
                assert!(detail.contains("quota exceeded"));
            }
            other => panic!("expected EngineUnavailable, got {:?}", other),
        }
        // No retry inside the loop.
        assert_eq!(engine.calls(), 1);
        assert!(tools.calls().is_empty());
    }

    #[tokio::test]
    async fn acting_forever_hits_the_budget() {
        let actions: Vec<Result<String, EngineError>> = (0..6)
            .map(|_| act("WeatherTool", "Bangalore"))
            .collect();
        let engine = Arc::new(ScriptedEngine::new(actions));
        let tools = Arc::new(FixedTools::bangalore());
        let use_case = PlanTripUseCase::new(engine.clone(), tools.clone());

        let query = Query::new("weather in Bangalore").unwrap();
        let result = use_case.execute(&query).await;

        assert!(!result.success);
        assert_eq!(result.error, Some(QueryError::IterationBudgetExceeded));
        assert_eq!(tools.calls().len(), DEFAULT_MAX_ITERATIONS);
    }

    #[tokio::test]
    async fn iteration_cap_is_configurable() {
        let garbage: Vec<Result<String, EngineError>> =
            (0..3).map(|_| Ok("nonsense".to_string())).collect();
        let engine = Arc::new(ScriptedEngine::new(garbage));
        let tools = Arc::new(FixedTools::bangalore());
        let use_case = PlanTripUseCase::new(engine.clone(), tools).with_max_iterations(2);

        let query = Query::new("weather in Bangalore").unwrap();
        let result = use_case.execute(&query).await;

        assert!(!result.success);
        assert_eq!(engine.calls(), 2);
    }
}
