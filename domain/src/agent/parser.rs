//! Turn parsing from reasoning-engine responses.
//!
//! The engine replies in the Thought/Action/Action Input/Final Answer text
//! format. This module extracts a structured [`Decision`] from that text,
//! rejecting malformed turns so the loop can re-prompt with feedback.
//!
//! Line-oriented string parsing, mirroring the format the prompt asks for;
//! no attempt is made to rescue free-form responses.

use crate::agent::trace::Decision;
use crate::tool::capability::Capability;
use thiserror::Error;

const FINAL_ANSWER: &str = "Final Answer:";
const ACTION: &str = "Action:";
const ACTION_INPUT: &str = "Action Input:";
const THOUGHT: &str = "Thought:";

/// Why an engine turn could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing 'Action:' or 'Final Answer:'")]
    MissingAction,

    #[error("missing 'Action Input:' after 'Action:'")]
    MissingActionInput,

    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("response contains both an action and a final answer")]
    AmbiguousTurn,

    #[error("empty final answer")]
    EmptyFinalAnswer,
}

/// A successfully parsed engine turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTurn {
    /// The reasoning text preceding the decision (may be empty).
    pub thought: String,
    pub decision: Decision,
}

/// Parse one reasoning turn into a [`Decision`].
pub fn parse_turn(text: &str) -> Result<ParsedTurn, ParseError> {
    let has_action = text
        .lines()
        .any(|line| line.trim_start().starts_with(ACTION));
    let final_answer_at = text.find(FINAL_ANSWER);

    if let Some(idx) = final_answer_at {
        // A turn must either act or finish, never both.
        if has_action {
            return Err(ParseError::AmbiguousTurn);
        }
        let answer = text[idx + FINAL_ANSWER.len()..].trim();
        if answer.is_empty() {
            return Err(ParseError::EmptyFinalAnswer);
        }
        return Ok(ParsedTurn {
            thought: thought_before(text, idx),
            decision: Decision::Finish {
                answer: answer.to_string(),
            },
        });
    }

    if !has_action {
        return Err(ParseError::MissingAction);
    }

    let mut action: Option<&str> = None;
    let mut input: Option<&str> = None;
    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(ACTION_INPUT) {
            if input.is_none() {
                input = Some(rest.trim());
            }
        } else if let Some(rest) = line.strip_prefix(ACTION) {
            if action.is_none() {
                action = Some(rest.trim());
            }
        }
    }

    let action = action.ok_or(ParseError::MissingAction)?;
    let input = input.ok_or(ParseError::MissingActionInput)?;
    let capability =
        Capability::parse(action).ok_or_else(|| ParseError::UnknownTool(action.to_string()))?;

    let action_at = text.find(ACTION).unwrap_or(0);
    Ok(ParsedTurn {
        thought: thought_before(text, action_at),
        decision: Decision::Act {
            capability,
            input: strip_quotes(input).to_string(),
        },
    })
}

/// Text preceding the decision marker, with a leading "Thought:" label
/// removed. The prompt ends in "Thought: ", so the label is usually absent
/// from the completion itself.
fn thought_before(text: &str, marker_at: usize) -> String {
    let head = text[..marker_at].trim();
    head.strip_prefix(THOUGHT).unwrap_or(head).trim().to_string()
}

/// Models sometimes quote the place name; strip one matching pair.
fn strip_quotes(input: &str) -> &str {
    let stripped = input
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| input.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')));
    stripped.unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_action_turn() {
        let text = "I need the current weather for Bangalore.\n\
                    Action: WeatherTool\n\
                    Action Input: Bangalore";
        let turn = parse_turn(text).unwrap();
        assert_eq!(turn.thought, "I need the current weather for Bangalore.");
        assert_eq!(
            turn.decision,
            Decision::Act {
                capability: Capability::Weather,
                input: "Bangalore".to_string(),
            }
        );
    }

    #[test]
    fn parses_action_turn_with_thought_label() {
        let text = "Thought: the user wants sightseeing ideas\n\
                    Action: PlacesTool\n\
                    Action Input: Paris";
        let turn = parse_turn(text).unwrap();
        assert_eq!(turn.thought, "the user wants sightseeing ideas");
        assert_eq!(
            turn.decision,
            Decision::Act {
                capability: Capability::Places,
                input: "Paris".to_string(),
            }
        );
    }

    #[test]
    fn parses_final_answer() {
        let text = "I now know the final answer\n\
                    Final Answer: In Bengaluru it's currently 24°C with a chance of 35% to rain.";
        let turn = parse_turn(text).unwrap();
        assert_eq!(turn.thought, "I now know the final answer");
        assert_eq!(
            turn.decision,
            Decision::Finish {
                answer: "In Bengaluru it's currently 24°C with a chance of 35% to rain."
                    .to_string(),
            }
        );
    }

    #[test]
    fn final_answer_keeps_following_lines() {
        let text = "Final Answer: Two things to know:\nit's warm, and Cubbon Park is lovely.";
        let turn = parse_turn(text).unwrap();
        match turn.decision {
            Decision::Finish { answer } => {
                assert!(answer.contains("Two things to know:"));
                assert!(answer.contains("Cubbon Park"));
            }
            other => panic!("expected Finish, got {:?}", other),
        }
    }

    #[test]
    fn strips_quotes_from_action_input() {
        let text = "Action: WeatherTool\nAction Input: \"Bangalore\"";
        let turn = parse_turn(text).unwrap();
        assert_eq!(
            turn.decision,
            Decision::Act {
                capability: Capability::Weather,
                input: "Bangalore".to_string(),
            }
        );
    }

    #[test]
    fn rejects_turn_with_neither_action_nor_answer() {
        let err = parse_turn("Let me think about this for a moment.").unwrap_err();
        assert_eq!(err, ParseError::MissingAction);
    }

    #[test]
    fn rejects_action_without_input() {
        let text = "Action: WeatherTool";
        assert_eq!(parse_turn(text).unwrap_err(), ParseError::MissingActionInput);
    }

    #[test]
    fn rejects_unknown_tool() {
        let text = "Action: CalculatorTool\nAction Input: 2+2";
        assert_eq!(
            parse_turn(text).unwrap_err(),
            ParseError::UnknownTool("CalculatorTool".to_string())
        );
    }

    #[test]
    fn rejects_turn_with_both_action_and_answer() {
        let text = "Action: WeatherTool\n\
                    Action Input: Bangalore\n\
                    Final Answer: it's sunny";
        assert_eq!(parse_turn(text).unwrap_err(), ParseError::AmbiguousTurn);
    }

    #[test]
    fn rejects_empty_final_answer() {
        assert_eq!(
            parse_turn("Final Answer:   ").unwrap_err(),
            ParseError::EmptyFinalAnswer
        );
    }

    #[test]
    fn action_input_before_action_still_parses() {
        // Models occasionally reorder the two lines.
        let text = "Action Input: Rome\nAction: PlacesTool";
        let turn = parse_turn(text).unwrap();
        assert_eq!(
            turn.decision,
            Decision::Act {
                capability: Capability::Places,
                input: "Rome".to_string(),
            }
        );
    }
}
