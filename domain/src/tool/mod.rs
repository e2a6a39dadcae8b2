//! Capability tools: the closed set of lookups and their replies

pub mod capability;
pub mod reply;
