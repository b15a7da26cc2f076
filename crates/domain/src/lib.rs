//! Domain types for the loan repayment simulator.
//!
//! This crate holds the configuration bundles, enums, value objects and the
//! deterministic amortization math shared by the stochastic engine and any
//! presentation layer built on top of it. Nothing here draws random numbers.

pub mod config;
pub mod enums;
pub mod errors;
pub mod events;
pub mod math;
pub mod value_objects;
