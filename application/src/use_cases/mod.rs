//! Use cases

pub mod plan_trip;
