//! Prompt rendering for the reasoning engine
//!
//! The template carries the actual routing logic: the rules telling the
//! engine how to pick tools, how to extract place names, and how to pass
//! the place-not-found sentence through unmodified. Changing the wording
//! here changes routing behavior.

use crate::agent::trace::ReasoningTrace;
use crate::tool::capability::Capability;

/// Renders the per-turn prompt for the reasoning engine.
pub struct ReactPrompt;

impl ReactPrompt {
    /// Build the full prompt for one reasoning turn.
    ///
    /// `feedback` is set when the previous turn could not be parsed; it is
    /// shown to the engine as an observation so it can correct its format.
    pub fn render(query: &str, trace: &ReasoningTrace, feedback: Option<&str>) -> String {
        format!(
            r#"You are a tourism assistant helping users plan their trips.

You have access to these tools:
{catalog}

Use the following format:

Question: the input question you must answer
Thought: you should always think about what to do
Action: the action to take, should be one of [{names}]
Action Input: the input to the action (should be ONLY the place name)
Observation: the result of the action
... (this Thought/Action/Action Input/Observation can repeat N times)
Thought: I now know the final answer
Final Answer: the final answer to the original input question

Important rules:
1. Extract the place name from the user's query
2. If the user asks about weather, use WeatherTool
3. If the user asks about places to visit, use PlacesTool
4. If the user asks about both, use both tools
5. Always provide a natural, conversational response
6. If a place doesn't exist, respond: "I don't know this place exists"

Begin!

Question: {query}
Thought: {scratchpad}"#,
            catalog = Capability::catalog(),
            names = Capability::names(),
            query = query,
            scratchpad = Self::scratchpad(trace, feedback),
        )
    }

    /// The agent scratchpad: every completed step replayed in the same
    /// format the engine produced it, each followed by its observation and
    /// an open "Thought: " for the next turn.
    fn scratchpad(trace: &ReasoningTrace, feedback: Option<&str>) -> String {
        let mut pad = String::new();
        for step in trace.steps() {
            pad.push_str(&step.thought);
            pad.push('\n');
            pad.push_str(&format!("Action: {}\n", step.capability.name()));
            pad.push_str(&format!("Action Input: {}\n", step.input));
            pad.push_str(&format!("Observation: {}\n", step.observation));
            pad.push_str("Thought: ");
        }
        if let Some(feedback) = feedback {
            pad.push_str(&format!("Observation: {}\n", feedback));
            pad.push_str("Thought: ");
        }
        pad
    }
}
