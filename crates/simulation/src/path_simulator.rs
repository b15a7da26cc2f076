//! One full loan lifetime.
//!
//! Composes the amortizer and the life-event engine into a year-by-year
//! path: a single growth-rate draw fixes the career trajectory for the
//! whole path, each year advances the balance under the configured policy,
//! life events perturb salary and balance, and the path terminates as soon
//! as the internal balance reaches zero.

use crate::amortizer::{LoanRates, YearState, advance_year};
use crate::event::EventLog;
use crate::life_event;
use crate::rng::VariateSource;
use loansim_domain::config::SimulationConfig;
use loansim_domain::enums::WriteOffRule;
use loansim_domain::errors::SimulationError;
use loansim_domain::value_objects::PathResult;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Simulates one loan path.
///
/// The growth rate is drawn once per path, not per year: one simulated
/// individual follows one persistent career growth trajectory. Trajectory
/// values are floored at zero; the internal balance may dip negative for
/// the single step that terminates the path.
pub fn simulate_loan_path<R: VariateSource + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<PathResult, SimulationError> {
    config.validate()?;

    let growth_rate = rng.normal(config.salary.growth_mean, config.salary.growth_std)?;
    let rates = LoanRates::from_terms(&config.loan);
    let mut state = YearState {
        balance: config.loan.initial_balance.to_f64().unwrap_or(0.0),
        salary: config.salary.starting_salary.to_f64().unwrap_or(0.0),
    };

    let mut trajectory = Vec::with_capacity(config.loan.term_years as usize);
    let mut log = EventLog::new();
    let mut total_interest = 0.0;

    for year in 1..=config.loan.term_years {
        if state.balance <= 0.0 {
            break;
        }

        let outcome = advance_year(config.policy, &mut state, &rates);
        total_interest += outcome.interest_charged;

        let event = life_event::maybe_trigger(rng, &config.life_events)?;
        state.salary = event.salary_effect.apply(state.salary);
        if event.interest_surcharge > 0.0 {
            state.balance += state.balance * rates.interest_rate * event.interest_surcharge;
        }
        if let Some(description) = event.description {
            log.record(year, description);
        }

        trajectory.push(Decimal::from_f64(state.balance.max(0.0)).unwrap_or(Decimal::ZERO));
        if state.balance <= 0.0 {
            break;
        }

        state.salary *= 1.0 + growth_rate;
    }

    let written_off = state.balance > 0.0
        && matches!(config.write_off, WriteOffRule::AfterYears(n) if config.loan.term_years >= n);

    Ok(PathResult {
        trajectory,
        growth_rate,
        total_interest: Decimal::from_f64(total_interest).unwrap_or(Decimal::ZERO),
        events: log.into_events(),
        written_off,
    })
}
