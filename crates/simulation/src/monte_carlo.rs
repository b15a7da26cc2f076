//! Monte Carlo aggregation across independent loan paths.
//!
//! Repeats the path simulator `iterations` times per scenario, computes the
//! mean total interest, and selects a handful of representative
//! trajectories for focused reporting.

use crate::path_simulator::simulate_loan_path;
use crate::rng::VariateSource;
use loansim_domain::config::{LoanTerms, SalaryModel, SimulationConfig};
use loansim_domain::enums::RepaymentPolicy;
use loansim_domain::errors::SimulationError;
use loansim_domain::value_objects::PathResult;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// Indices into a scenario's results picked for focused reporting.
///
/// Ranking sorts final trajectory values ascending, substituting zero for
/// paths that ended before the full term; the groups may overlap when
/// there are few trials. A visualization aid, not a statistical estimator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representatives {
    /// The three lowest-ranked paths (fastest payoff).
    pub fastest: Vec<usize>,
    /// The floor-midpoint path of the ranking.
    pub median: Option<usize>,
    /// The three highest-ranked paths (slowest or no payoff).
    pub slowest: Vec<usize>,
}

/// All trials of one scenario plus derived statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioAggregate {
    /// Every path simulated for the scenario.
    pub results: Vec<PathResult>,
    /// Mean total interest across the paths.
    pub mean_interest: Decimal,
    /// Paths selected for reporting.
    pub representatives: Representatives,
}

impl ScenarioAggregate {
    /// The fastest-payoff paths.
    #[must_use]
    pub fn fastest_paths(&self) -> Vec<&PathResult> {
        self.representatives
            .fastest
            .iter()
            .map(|&i| &self.results[i])
            .collect()
    }

    /// The median-ranked path.
    #[must_use]
    pub fn median_path(&self) -> Option<&PathResult> {
        self.representatives.median.map(|i| &self.results[i])
    }

    /// The slowest-payoff paths.
    #[must_use]
    pub fn slowest_paths(&self) -> Vec<&PathResult> {
        self.representatives
            .slowest
            .iter()
            .map(|&i| &self.results[i])
            .collect()
    }
}

/// Runs repeated trials of one configuration.
#[derive(Debug, Clone)]
pub struct MonteCarloRunner {
    /// The configuration every trial runs under.
    pub config: SimulationConfig,
}

impl MonteCarloRunner {
    /// Creates a runner for a configuration.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Runs `iterations` independent trials of the configured scenario.
    pub fn run_scenario<R: VariateSource>(
        &self,
        rng: &mut R,
    ) -> Result<ScenarioAggregate, SimulationError> {
        self.config.validate()?;

        let mut results = Vec::with_capacity(self.config.iterations);
        for _ in 0..self.config.iterations {
            results.push(simulate_loan_path(&self.config, rng)?);
        }

        let aggregate = aggregate(self.config.loan.term_years, results);
        debug!(
            iterations = aggregate.results.len(),
            mean_interest = %aggregate.mean_interest,
            "scenario complete"
        );
        Ok(aggregate)
    }

    /// Runs one scenario per starting salary, keyed by salary.
    pub fn run<R: VariateSource>(
        &self,
        starting_salaries: &[Decimal],
        rng: &mut R,
    ) -> Result<BTreeMap<Decimal, ScenarioAggregate>, SimulationError> {
        let mut scenarios = BTreeMap::new();
        for &salary in starting_salaries {
            let mut config = self.config.clone();
            config.salary.starting_salary = salary;
            let scenario = Self::new(config).run_scenario(rng)?;
            scenarios.insert(salary, scenario);
        }
        Ok(scenarios)
    }
}

fn aggregate(term_years: u32, results: Vec<PathResult>) -> ScenarioAggregate {
    let total_interest: Decimal = results.iter().map(|r| r.total_interest).sum();
    let mean_interest = if results.is_empty() {
        Decimal::ZERO
    } else {
        total_interest / Decimal::from(results.len())
    };

    let mut ranked: Vec<(usize, Decimal)> = results
        .iter()
        .enumerate()
        .map(|(i, r)| (i, r.ranking_balance(term_years)))
        .collect();
    ranked.sort_by(|a, b| a.1.cmp(&b.1));

    let fastest: Vec<usize> = ranked.iter().take(3).map(|&(i, _)| i).collect();
    let median = (!ranked.is_empty()).then(|| ranked[ranked.len() / 2].0);
    let slowest: Vec<usize> = ranked
        .iter()
        .skip(ranked.len().saturating_sub(3))
        .map(|&(i, _)| i)
        .collect();

    ScenarioAggregate {
        results,
        mean_interest,
        representatives: Representatives {
            fastest,
            median,
            slowest,
        },
    }
}

/// Mean total interest for a student loan, as a scalar.
///
/// Convenience wrapper for the lump-sum comparison feature: life events
/// disabled, interest-first allocation (the ordering under which the
/// aggregate interest metric is meaningful).
#[allow(clippy::too_many_arguments)]
pub fn simulate_student_loan_interest<R: VariateSource>(
    initial_balance: Decimal,
    interest_rate: f64,
    repayment_threshold: Decimal,
    repayment_rate: f64,
    term_years: u32,
    salary: Decimal,
    growth_mean: f64,
    growth_std: f64,
    iterations: usize,
    rng: &mut R,
) -> Result<Decimal, SimulationError> {
    let config = SimulationConfig::new(
        LoanTerms::new(
            initial_balance,
            interest_rate,
            repayment_threshold,
            repayment_rate,
            term_years,
        ),
        SalaryModel::new(salary, growth_mean, growth_std),
    )
    .with_policy(RepaymentPolicy::InterestFirst)
    .with_iterations(iterations);

    Ok(MonteCarloRunner::new(config).run_scenario(rng)?.mean_interest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedSource, StdRandomSource};
    use loansim_domain::config::LifeEventConfig;
    use rust_decimal_macros::dec;

    fn config(salary: Decimal, iterations: usize) -> SimulationConfig {
        SimulationConfig::new(
            LoanTerms::new(dec!(60000), 0.043, dec!(24990), 0.09, 25),
            SalaryModel::new(salary, 0.03, 0.05),
        )
        .with_iterations(iterations)
    }

    #[test]
    fn test_scenario_has_one_result_per_iteration() {
        let runner = MonteCarloRunner::new(
            config(dec!(30000), 17).with_life_events(LifeEventConfig::all_enabled()),
        );
        let scenario = runner.run_scenario(&mut StdRandomSource::seeded(1)).unwrap();
        assert_eq!(scenario.results.len(), 17);
    }

    #[test]
    fn test_single_trial_aggregates_to_itself() {
        let runner = MonteCarloRunner::new(config(dec!(30000), 1));
        let scenario = runner.run_scenario(&mut StdRandomSource::seeded(5)).unwrap();
        assert_eq!(scenario.mean_interest, scenario.results[0].total_interest);
        // Duplicate selection across the groups is acceptable.
        assert_eq!(scenario.representatives.fastest, vec![0]);
        assert_eq!(scenario.representatives.median, Some(0));
        assert_eq!(scenario.representatives.slowest, vec![0]);
    }

    #[test]
    fn test_representatives_are_ordered_by_ranking() {
        let runner = MonteCarloRunner::new(
            config(dec!(40000), 40).with_life_events(LifeEventConfig::all_enabled()),
        );
        let scenario = runner.run_scenario(&mut StdRandomSource::seeded(9)).unwrap();

        assert_eq!(scenario.representatives.fastest.len(), 3);
        assert_eq!(scenario.representatives.slowest.len(), 3);
        let fastest = scenario.fastest_paths()[0].ranking_balance(25);
        let median = scenario.median_path().unwrap().ranking_balance(25);
        let slowest = scenario.slowest_paths().last().unwrap().ranking_balance(25);
        assert!(fastest <= median);
        assert!(median <= slowest);
    }

    #[test]
    fn test_run_keys_scenarios_by_salary() {
        let runner = MonteCarloRunner::new(config(dec!(30000), 5));
        let scenarios = runner
            .run(
                &[dec!(30000), dec!(90000)],
                &mut StdRandomSource::seeded(2),
            )
            .unwrap();
        assert_eq!(scenarios.len(), 2);
        assert!(scenarios.contains_key(&dec!(30000)));
        assert!(scenarios.contains_key(&dec!(90000)));
        for scenario in scenarios.values() {
            assert_eq!(scenario.results.len(), 5);
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_aggregate() {
        let runner = MonteCarloRunner::new(
            config(dec!(30000), 10).with_life_events(LifeEventConfig::all_enabled()),
        );
        let a = runner.run_scenario(&mut StdRandomSource::seeded(3)).unwrap();
        let b = runner.run_scenario(&mut StdRandomSource::seeded(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_running() {
        let runner = MonteCarloRunner::new(config(dec!(30000), 0));
        assert!(matches!(
            runner.run_scenario(&mut StdRandomSource::seeded(1)),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_scalar_wrapper_charges_nothing_below_threshold() {
        // Under interest-first allocation a salary pinned below the
        // threshold charges no interest to the metric.
        let mean = simulate_student_loan_interest(
            dec!(60000),
            0.043,
            dec!(24990),
            0.09,
            25,
            dec!(10000),
            0.0,
            0.0,
            4,
            &mut ScriptedSource::inert(),
        )
        .unwrap();
        assert_eq!(mean, Decimal::ZERO);

        let mean = simulate_student_loan_interest(
            dec!(60000),
            0.043,
            dec!(24990),
            0.09,
            25,
            dec!(45000),
            0.0,
            0.0,
            4,
            &mut ScriptedSource::inert(),
        )
        .unwrap();
        assert!(mean > Decimal::ZERO);
    }
}
