//! OpenAI-compatible chat completion engine.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tourmate_application::{EngineError, ReasoningEngine};
use tracing::debug;

pub const OPENAI_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// The model must not hallucinate observations; generation stops before it
// can write one.
const STOP_SEQUENCES: &[&str] = &["\nObservation:"];

/// [`ReasoningEngine`] backed by an OpenAI-compatible chat completions
/// endpoint. Any service speaking that API works through `base_url`.
pub struct OpenAiEngine {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    stop: &'a [&'a str],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiEngine {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EngineError::RequestFailed(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            // Deterministic routing decisions by default.
            temperature: 0.0,
        })
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

#[async_trait]
impl ReasoningEngine for OpenAiEngine {
    async fn decide(&self, prompt: &str) -> Result<String, EngineError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            stop: STOP_SEQUENCES,
        };

        debug!("Requesting completion from {} ({})", url, self.model);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EngineError::Timeout
                } else {
                    EngineError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        match status.as_u16() {
            401 | 403 => return Err(EngineError::AuthFailed(format!("HTTP {}", status))),
            429 => return Err(EngineError::RateLimited(format!("HTTP {}", status))),
            s if !status.is_success() => {
                return Err(EngineError::RequestFailed(format!("HTTP {}", s)));
            }
            _ => {}
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| EngineError::RequestFailed(e.to_string()))?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();
        let content = content.trim();
        if content.is_empty() {
            return Err(EngineError::EmptyResponse);
        }
        Ok(content.to_string())
    }
}
