//! Stochastic repayment simulation engine.
//!
//! Drives year-by-year loan paths under interest accrual, income-contingent
//! repayment, and randomly injected life events, and aggregates many
//! independent trials into per-scenario statistics. All randomness flows
//! through an injected [`rng::VariateSource`], so every run is reproducible
//! from a seed.

pub mod amortizer;
pub mod event;
pub mod index_fund;
pub mod life_event;
pub mod monte_carlo;
pub mod path_simulator;
pub mod prelude;
pub mod rng;
pub mod sweep;
