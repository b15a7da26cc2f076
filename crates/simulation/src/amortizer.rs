//! Single-year loan amortization under the two repayment orderings.
//!
//! Both policies floor nothing here: the balance a step leaves behind may
//! be negative or exactly zero, which the path simulator treats as payoff.
//! Flooring only happens when a trajectory value is reported.

use loansim_domain::config::LoanTerms;
use loansim_domain::enums::RepaymentPolicy;
use rust_decimal::prelude::*;

/// Mutable per-year state of one simulated path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearState {
    /// Internal balance; may go negative on the final step.
    pub balance: f64,
    /// Salary used for this year's repayment.
    pub salary: f64,
}

/// Loan terms in the plain floats the inner loop runs on.
#[derive(Debug, Clone, Copy)]
pub struct LoanRates {
    /// Annual interest rate.
    pub interest_rate: f64,
    /// Salary threshold for repayments.
    pub repayment_threshold: f64,
    /// Repayment rate on salary above the threshold.
    pub repayment_rate: f64,
}

impl LoanRates {
    /// Extracts the rate terms from domain loan terms.
    #[must_use]
    pub fn from_terms(terms: &LoanTerms) -> Self {
        Self {
            interest_rate: terms.interest_rate,
            repayment_threshold: terms.repayment_threshold.to_f64().unwrap_or(0.0),
            repayment_rate: terms.repayment_rate,
        }
    }
}

/// What one amortization step did to the balance.
///
/// `interest_charged` follows the policy's reporting rule:
/// [`RepaymentPolicy::AccrueThenRepay`] reports the full annual accrual,
/// [`RepaymentPolicy::InterestFirst`] reports interest only while the
/// salary is above the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepOutcome {
    /// Interest charged to the reported total this year.
    pub interest_charged: f64,
    /// Repayment applied this year.
    pub repayment: f64,
}

/// Advances one year under the chosen policy.
pub fn advance_year(policy: RepaymentPolicy, state: &mut YearState, rates: &LoanRates) -> StepOutcome {
    match policy {
        RepaymentPolicy::AccrueThenRepay => accrue_then_repay(state, rates),
        RepaymentPolicy::InterestFirst => interest_first(state, rates),
    }
}

/// Accrues a full year of interest, then subtracts the flat repayment.
pub fn accrue_then_repay(state: &mut YearState, rates: &LoanRates) -> StepOutcome {
    let interest = state.balance * rates.interest_rate;
    state.balance += interest;

    let repayment = if state.salary > rates.repayment_threshold {
        (state.salary - rates.repayment_threshold) * rates.repayment_rate
    } else {
        0.0
    };
    state.balance -= repayment;

    StepOutcome {
        interest_charged: interest,
        repayment,
    }
}

/// Allocates the repayment to interest first, remainder to principal.
/// Below the threshold interest still accrues but is not charged to the
/// reported total.
pub fn interest_first(state: &mut YearState, rates: &LoanRates) -> StepOutcome {
    let interest = state.balance * rates.interest_rate;

    if state.salary > rates.repayment_threshold {
        let repayment = (state.salary - rates.repayment_threshold) * rates.repayment_rate;
        state.balance += interest - repayment;
        StepOutcome {
            interest_charged: interest,
            repayment,
        }
    } else {
        state.balance += interest;
        StepOutcome::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATES: LoanRates = LoanRates {
        interest_rate: 0.05,
        repayment_threshold: 25_000.0,
        repayment_rate: 0.09,
    };

    #[test]
    fn test_accrue_then_repay_below_threshold_compounds() {
        let mut state = YearState {
            balance: 1000.0,
            salary: 20_000.0,
        };
        let outcome = accrue_then_repay(&mut state, &RATES);
        assert_eq!(state.balance, 1050.0);
        assert_eq!(outcome.interest_charged, 50.0);
        assert_eq!(outcome.repayment, 0.0);

        // A second year compounds on the new balance.
        accrue_then_repay(&mut state, &RATES);
        assert_eq!(state.balance, 1102.5);
    }

    #[test]
    fn test_accrue_then_repay_above_threshold() {
        let mut state = YearState {
            balance: 10_000.0,
            salary: 35_000.0,
        };
        let outcome = accrue_then_repay(&mut state, &RATES);
        // 10000 * 1.05 - (35000 - 25000) * 0.09
        assert_eq!(state.balance, 10_500.0 - 900.0);
        assert_eq!(outcome.repayment, 900.0);
        assert_eq!(outcome.interest_charged, 500.0);
    }

    #[test]
    fn test_interest_first_shrinks_principal_by_surplus() {
        let mut state = YearState {
            balance: 10_000.0,
            salary: 35_000.0,
        };
        let outcome = interest_first(&mut state, &RATES);
        // Repayment 900 covers interest 500; principal drops by 400.
        assert_eq!(state.balance, 9600.0);
        assert_eq!(outcome.interest_charged, 500.0);
        assert_eq!(outcome.repayment, 900.0);
    }

    #[test]
    fn test_interest_first_grows_when_repayment_short_of_interest() {
        let mut state = YearState {
            balance: 100_000.0,
            salary: 30_000.0,
        };
        let outcome = interest_first(&mut state, &RATES);
        // Interest 5000 against repayment 450.
        assert_eq!(state.balance, 104_550.0);
        assert_eq!(outcome.interest_charged, 5000.0);
    }

    #[test]
    fn test_interest_first_below_threshold_charges_nothing() {
        let mut state = YearState {
            balance: 1000.0,
            salary: 20_000.0,
        };
        let outcome = interest_first(&mut state, &RATES);
        assert_eq!(state.balance, 1050.0);
        assert_eq!(outcome.interest_charged, 0.0);
        assert_eq!(outcome.repayment, 0.0);
    }

    #[test]
    fn test_policies_agree_on_balance_but_not_on_reported_interest() {
        // The orderings are algebraically equivalent on the balance; what
        // differs is the interest figure charged below the threshold.
        let mut a = YearState {
            balance: 10_000.0,
            salary: 20_000.0,
        };
        let mut b = a;
        let out_a = advance_year(RepaymentPolicy::AccrueThenRepay, &mut a, &RATES);
        let out_b = advance_year(RepaymentPolicy::InterestFirst, &mut b, &RATES);
        assert_eq!(a.balance, b.balance);
        assert_eq!(out_a.interest_charged, 500.0);
        assert_eq!(out_b.interest_charged, 0.0);
    }
}
