//! Ports: interfaces the application layer depends on

pub mod capability;
pub mod reasoning_engine;
