//! Parameter sweep across salary and rate grids.
//!
//! Runs the loan Monte Carlo for every (salary, loan rate) point, the
//! deterministic mortgage amortizer for every mortgage rate, and compares
//! the two per grid cell. The output rows feed the heatmap presentation
//! layer; the extremes point at the cells where overpaying the loan or the
//! mortgage matters most.

use crate::monte_carlo::MonteCarloRunner;
use crate::rng::VariateSource;
use loansim_domain::config::{LoanTerms, MortgageTerms, SalaryModel, SimulationConfig};
use loansim_domain::enums::RepaymentPolicy;
use loansim_domain::errors::SimulationError;
use loansim_domain::math::simulate_mortgage;
use loansim_domain::value_objects::SweepRow;
use rust_decimal::Decimal;
use tracing::debug;

/// Upper bound on `grid cells x iterations` for one sweep.
pub const MAX_SWEEP_TRIALS: usize = 10_000_000;

/// Scenario parameters held fixed across the sweep grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepFixedParams {
    /// Initial student loan balance.
    pub initial_balance: Decimal,
    /// Salary threshold for loan repayments.
    pub repayment_threshold: Decimal,
    /// Loan repayment rate above the threshold.
    pub repayment_rate: f64,
    /// Loan term in years.
    pub loan_term_years: u32,
    /// Mean annual salary growth.
    pub growth_mean: f64,
    /// Standard deviation of annual salary growth.
    pub growth_std: f64,
    /// Trials per grid cell.
    pub iterations: usize,
    /// Lump sum applied to the mortgage.
    pub lump_sum: Decimal,
    /// Mortgage balance before the lump sum.
    pub mortgage_balance: Decimal,
    /// Mortgage term in years.
    pub mortgage_term_years: u32,
}

/// All rows of a sweep plus the cells with the extreme differences.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome {
    /// One row per grid cell, in salary-major order.
    pub rows: Vec<SweepRow>,
    /// Index of the row with the largest `difference`.
    pub largest_difference: Option<usize>,
    /// Index of the row with the smallest `difference`.
    pub smallest_difference: Option<usize>,
}

impl SweepOutcome {
    /// The row where the loan costs the most relative to the mortgage.
    #[must_use]
    pub fn largest(&self) -> Option<&SweepRow> {
        self.largest_difference.map(|i| &self.rows[i])
    }

    /// The row where the loan costs the least relative to the mortgage.
    #[must_use]
    pub fn smallest(&self) -> Option<&SweepRow> {
        self.smallest_difference.map(|i| &self.rows[i])
    }
}

/// Sweeps the salary and rate grids and compares loan against mortgage
/// interest per cell.
///
/// Rejects grids whose `cells x iterations` product exceeds
/// [`MAX_SWEEP_TRIALS`] before any simulation starts. The loan Monte Carlo
/// runs once per (salary, loan rate) pair since the mortgage rate does not
/// enter the loan scenario.
pub fn run_parameter_sweep<R: VariateSource>(
    salary_grid: &[Decimal],
    loan_rate_grid: &[f64],
    mortgage_rate_grid: &[f64],
    fixed: &SweepFixedParams,
    rng: &mut R,
) -> Result<SweepOutcome, SimulationError> {
    let cells = salary_grid
        .len()
        .checked_mul(loan_rate_grid.len())
        .and_then(|n| n.checked_mul(mortgage_rate_grid.len()))
        .ok_or_else(|| {
            SimulationError::InvalidConfiguration("sweep grid size overflows".to_string())
        })?;
    if cells == 0 {
        return Err(SimulationError::InvalidConfiguration(
            "sweep grids must be non-empty".to_string(),
        ));
    }
    let trials = cells.checked_mul(fixed.iterations).ok_or_else(|| {
        SimulationError::InvalidConfiguration("sweep trial count overflows".to_string())
    })?;
    if trials > MAX_SWEEP_TRIALS {
        return Err(SimulationError::InvalidConfiguration(format!(
            "sweep of {cells} cells x {} iterations exceeds the {MAX_SWEEP_TRIALS} trial bound",
            fixed.iterations
        )));
    }

    let mut rows = Vec::with_capacity(cells);
    for &salary in salary_grid {
        for &loan_rate in loan_rate_grid {
            let config = SimulationConfig::new(
                LoanTerms::new(
                    fixed.initial_balance,
                    loan_rate,
                    fixed.repayment_threshold,
                    fixed.repayment_rate,
                    fixed.loan_term_years,
                ),
                SalaryModel::new(salary, fixed.growth_mean, fixed.growth_std),
            )
            .with_policy(RepaymentPolicy::InterestFirst)
            .with_iterations(fixed.iterations);

            let loan_interest = MonteCarloRunner::new(config)
                .run_scenario(rng)?
                .mean_interest;

            for &mortgage_rate in mortgage_rate_grid {
                let mortgage = simulate_mortgage(&MortgageTerms::new(
                    fixed.lump_sum,
                    fixed.mortgage_balance,
                    mortgage_rate,
                    fixed.mortgage_term_years,
                ))?;

                rows.push(SweepRow {
                    salary,
                    loan_rate,
                    mortgage_rate,
                    lump_sum: fixed.lump_sum,
                    loan_interest,
                    mortgage_interest: mortgage.total_interest,
                    difference: loan_interest - mortgage.total_interest,
                });
            }
        }
    }

    let largest_difference = rows
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.difference.cmp(&b.1.difference))
        .map(|(i, _)| i);
    let smallest_difference = rows
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.difference.cmp(&b.1.difference))
        .map(|(i, _)| i);

    debug!(rows = rows.len(), "parameter sweep complete");
    Ok(SweepOutcome {
        rows,
        largest_difference,
        smallest_difference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::StdRandomSource;
    use rust_decimal_macros::dec;

    fn fixed(iterations: usize) -> SweepFixedParams {
        SweepFixedParams {
            initial_balance: dec!(60000),
            repayment_threshold: dec!(24990),
            repayment_rate: 0.09,
            loan_term_years: 25,
            growth_mean: 0.03,
            growth_std: 0.05,
            iterations,
            lump_sum: dec!(20000),
            mortgage_balance: dec!(200000),
            mortgage_term_years: 25,
        }
    }

    #[test]
    fn test_single_cell_sweep() {
        let outcome = run_parameter_sweep(
            &[dec!(40000)],
            &[0.043],
            &[0.05],
            &fixed(10),
            &mut StdRandomSource::seeded(4),
        )
        .unwrap();

        assert_eq!(outcome.rows.len(), 1);
        let row = &outcome.rows[0];
        assert_eq!(row.difference, row.loan_interest - row.mortgage_interest);
        assert_eq!(outcome.largest_difference, Some(0));
        assert_eq!(outcome.smallest_difference, Some(0));
    }

    #[test]
    fn test_grid_produces_all_cells() {
        let outcome = run_parameter_sweep(
            &[dec!(30000), dec!(60000)],
            &[0.03, 0.05, 0.07],
            &[0.04, 0.06],
            &fixed(5),
            &mut StdRandomSource::seeded(8),
        )
        .unwrap();
        assert_eq!(outcome.rows.len(), 12);

        let largest = outcome.largest().unwrap();
        let smallest = outcome.smallest().unwrap();
        assert!(outcome.rows.iter().all(|r| r.difference <= largest.difference));
        assert!(outcome.rows.iter().all(|r| r.difference >= smallest.difference));
    }

    #[test]
    fn test_oversized_sweep_is_rejected() {
        let salaries = vec![dec!(30000); 200];
        let loan_rates = vec![0.05; 100];
        let mortgage_rates = vec![0.05; 100];
        let result = run_parameter_sweep(
            &salaries,
            &loan_rates,
            &mortgage_rates,
            &fixed(1000),
            &mut StdRandomSource::seeded(1),
        );
        assert!(matches!(
            result,
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        let result = run_parameter_sweep(
            &[],
            &[0.05],
            &[0.05],
            &fixed(10),
            &mut StdRandomSource::seeded(1),
        );
        assert!(result.is_err());
    }
}
