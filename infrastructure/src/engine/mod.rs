//! Reasoning engine adapters.

pub mod openai;

pub use openai::OpenAiEngine;
