//! Configuration bundles for simulation runs.
//!
//! All parameters are passed explicitly as one immutable value into the
//! engine; there is no ambient state. Builders follow the `with_*` pattern
//! and validation happens once, before any simulation starts.

use crate::enums::{RepaymentPolicy, WriteOffRule};
use crate::errors::SimulationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Terms of an income-contingent loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Balance at the start of year one.
    pub initial_balance: Decimal,
    /// Annual interest rate as a decimal (0.05 for 5%).
    pub interest_rate: f64,
    /// Salary threshold below which no repayment is due.
    pub repayment_threshold: Decimal,
    /// Fraction of salary above the threshold paid each year (0.09 for 9%).
    pub repayment_rate: f64,
    /// Loan term in years.
    pub term_years: u32,
}

impl LoanTerms {
    /// Creates new loan terms.
    #[must_use]
    pub fn new(
        initial_balance: Decimal,
        interest_rate: f64,
        repayment_threshold: Decimal,
        repayment_rate: f64,
        term_years: u32,
    ) -> Self {
        Self {
            initial_balance,
            interest_rate,
            repayment_threshold,
            repayment_rate,
            term_years,
        }
    }
}

/// Salary level and stochastic growth parameters for one simulated career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryModel {
    /// Salary in year one.
    pub starting_salary: Decimal,
    /// Mean of the annual growth rate distribution.
    pub growth_mean: f64,
    /// Standard deviation of the annual growth rate distribution.
    pub growth_std: f64,
}

impl SalaryModel {
    /// Creates a new salary model.
    #[must_use]
    pub fn new(starting_salary: Decimal, growth_mean: f64, growth_std: f64) -> Self {
        Self {
            starting_salary,
            growth_mean,
            growth_std,
        }
    }
}

/// Which life events may fire, and the size of job-change salary moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeEventConfig {
    /// Pregnancy: nine months without salary.
    pub pregnancy: bool,
    /// Layoff: six months on half salary.
    pub layoff: bool,
    /// Sick leave: three months on reduced salary.
    pub sick_leave: bool,
    /// Job change: a pay cut or pay rise of the configured size.
    pub job_change: bool,
    /// Pay cut size in percent (20.0 for a 20% cut).
    pub paycut_pct: f64,
    /// Pay rise size in percent.
    pub payrise_pct: f64,
}

impl LifeEventConfig {
    /// All events enabled with 20% job-change moves.
    #[must_use]
    pub fn all_enabled() -> Self {
        Self {
            pregnancy: true,
            layoff: true,
            sick_leave: true,
            job_change: true,
            paycut_pct: 20.0,
            payrise_pct: 20.0,
        }
    }

    /// No events fire. The yearly trigger and category draws are still
    /// consumed; see the life-event engine for the exact contract.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pregnancy: false,
            layoff: false,
            sick_leave: false,
            job_change: false,
            paycut_pct: 0.0,
            payrise_pct: 0.0,
        }
    }

    /// Sets the pay cut percentage.
    #[must_use]
    pub fn with_paycut_pct(mut self, pct: f64) -> Self {
        self.paycut_pct = pct;
        self
    }

    /// Sets the pay rise percentage.
    #[must_use]
    pub fn with_payrise_pct(mut self, pct: f64) -> Self {
        self.payrise_pct = pct;
        self
    }
}

impl Default for LifeEventConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Immutable input bundle for one simulation invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Loan terms.
    pub loan: LoanTerms,
    /// Salary level and growth parameters.
    pub salary: SalaryModel,
    /// Life-event toggles.
    pub life_events: LifeEventConfig,
    /// Interest/repayment ordering.
    pub policy: RepaymentPolicy,
    /// End-of-term forgiveness rule.
    pub write_off: WriteOffRule,
    /// Number of Monte Carlo trials per scenario.
    pub iterations: usize,
}

impl SimulationConfig {
    /// Creates a config with defaults: life events disabled,
    /// accrue-then-repay ordering, no write-off, 100 iterations.
    #[must_use]
    pub fn new(loan: LoanTerms, salary: SalaryModel) -> Self {
        Self {
            loan,
            salary,
            life_events: LifeEventConfig::disabled(),
            policy: RepaymentPolicy::AccrueThenRepay,
            write_off: WriteOffRule::Never,
            iterations: 100,
        }
    }

    /// Sets the life-event configuration.
    #[must_use]
    pub fn with_life_events(mut self, life_events: LifeEventConfig) -> Self {
        self.life_events = life_events;
        self
    }

    /// Sets the repayment policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RepaymentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the write-off rule.
    #[must_use]
    pub fn with_write_off(mut self, write_off: WriteOffRule) -> Self {
        self.write_off = write_off;
        self
    }

    /// Sets the iteration count.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Rejects out-of-range parameters before any simulation starts.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.loan.initial_balance < Decimal::ZERO {
            return Err(SimulationError::InvalidConfiguration(format!(
                "initial balance must be non-negative, got {}",
                self.loan.initial_balance
            )));
        }
        if self.loan.repayment_threshold < Decimal::ZERO {
            return Err(SimulationError::InvalidConfiguration(format!(
                "repayment threshold must be non-negative, got {}",
                self.loan.repayment_threshold
            )));
        }
        validate_rate("interest rate", self.loan.interest_rate)?;
        validate_rate("repayment rate", self.loan.repayment_rate)?;
        if self.loan.term_years < 1 {
            return Err(SimulationError::InvalidConfiguration(
                "loan term must be at least 1 year".to_string(),
            ));
        }
        if self.salary.starting_salary < Decimal::ZERO {
            return Err(SimulationError::InvalidConfiguration(format!(
                "starting salary must be non-negative, got {}",
                self.salary.starting_salary
            )));
        }
        if !self.salary.growth_mean.is_finite() {
            return Err(SimulationError::InvalidConfiguration(
                "salary growth mean must be finite".to_string(),
            ));
        }
        if !self.salary.growth_std.is_finite() || self.salary.growth_std < 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "salary growth std dev must be non-negative, got {}",
                self.salary.growth_std
            )));
        }
        validate_percentage("paycut percentage", self.life_events.paycut_pct)?;
        validate_percentage("payrise percentage", self.life_events.payrise_pct)?;
        if self.iterations < 1 {
            return Err(SimulationError::InvalidConfiguration(
                "iteration count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Terms of a fixed-rate repayment mortgage with an optional lump sum
/// applied up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageTerms {
    /// Lump sum applied to the balance before amortization starts.
    pub lump_sum: Decimal,
    /// Balance before the lump sum is applied.
    pub balance: Decimal,
    /// Annual interest rate as a decimal.
    pub interest_rate: f64,
    /// Mortgage term in years.
    pub term_years: u32,
}

impl MortgageTerms {
    /// Creates new mortgage terms.
    #[must_use]
    pub fn new(lump_sum: Decimal, balance: Decimal, interest_rate: f64, term_years: u32) -> Self {
        Self {
            lump_sum,
            balance,
            interest_rate,
            term_years,
        }
    }

    /// Rejects out-of-range parameters.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.lump_sum < Decimal::ZERO {
            return Err(SimulationError::InvalidConfiguration(format!(
                "lump sum must be non-negative, got {}",
                self.lump_sum
            )));
        }
        if self.balance < Decimal::ZERO {
            return Err(SimulationError::InvalidConfiguration(format!(
                "mortgage balance must be non-negative, got {}",
                self.balance
            )));
        }
        validate_rate("mortgage interest rate", self.interest_rate)?;
        Ok(())
    }
}

fn validate_rate(name: &str, rate: f64) -> Result<(), SimulationError> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(SimulationError::InvalidConfiguration(format!(
            "{name} must be non-negative and finite, got {rate}"
        )));
    }
    Ok(())
}

fn validate_percentage(name: &str, pct: f64) -> Result<(), SimulationError> {
    if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
        return Err(SimulationError::InvalidConfiguration(format!(
            "{name} must be between 0 and 100, got {pct}"
        )));
    }
    Ok(())
}
