//! Core domain types: query input and resolved places

pub mod place;
pub mod query;
