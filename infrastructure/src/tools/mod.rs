//! Capability tool execution over the lookup clients.

pub mod executor;

pub use executor::HttpToolExecutor;
