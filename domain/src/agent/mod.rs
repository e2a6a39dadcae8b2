//! Reasoning-loop domain logic: trace, turn parsing, and prompt rendering

pub mod parser;
pub mod prompt;
pub mod trace;
