//! User query input type

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when a query is empty or whitespace-only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Query must not be empty")]
pub struct EmptyQuery;

/// A validated, trimmed user query.
///
/// The only validation is non-emptiness after trimming; the query text is
/// otherwise free-form natural language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query(String);

impl Query {
    /// Creates a query from raw input, trimming surrounding whitespace.
    pub fn new(text: impl Into<String>) -> Result<Self, EmptyQuery> {
        let trimmed = text.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(EmptyQuery);
        }
        Ok(Self(trimmed))
    }

    /// Returns the query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
