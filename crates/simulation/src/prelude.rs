//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use loansim_simulation::prelude::*;
//! ```

// Amortizer
pub use crate::amortizer::{LoanRates, StepOutcome, YearState, advance_year};

// Events
pub use crate::event::EventLog;

// Index fund
pub use crate::index_fund::simulate_index_fund;

// Life events
pub use crate::life_event::{EVENT_PROBABILITY, LifeEventOutcome, SalaryEffect, maybe_trigger};

// Monte Carlo
pub use crate::monte_carlo::{
    MonteCarloRunner, Representatives, ScenarioAggregate, simulate_student_loan_interest,
};

// Path simulation
pub use crate::path_simulator::simulate_loan_path;

// Random variate sources
pub use crate::rng::{ScriptedSource, StdRandomSource, VariateSource};

// Parameter sweep
pub use crate::sweep::{MAX_SWEEP_TRIALS, SweepFixedParams, SweepOutcome, run_parameter_sweep};

// Domain re-exports used at every call site
pub use loansim_domain::config::{
    LifeEventConfig, LoanTerms, MortgageTerms, SalaryModel, SimulationConfig,
};
pub use loansim_domain::enums::{JobChangeDirection, RepaymentPolicy, WriteOffRule};
pub use loansim_domain::errors::SimulationError;
pub use loansim_domain::events::{LifeEvent, YearEvent};
pub use loansim_domain::math::simulate_mortgage;
pub use loansim_domain::value_objects::{MortgageResult, PathResult, SweepRow};
