//! Fixed-rate mortgage amortization.
//!
//! Deterministic month-by-month amortization of a repayment mortgage, used
//! as the comparison baseline for the stochastic loan simulations. The
//! inner loop runs in f64 like the rest of the numeric core; currency
//! values cross the boundary as `Decimal`.

use crate::config::MortgageTerms;
use crate::errors::SimulationError;
use crate::value_objects::MortgageResult;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Fixed monthly payment for `principal` amortized over `total_months` at
/// `monthly_rate`, by the standard annuity formula:
/// `P * r * (1+r)^n / ((1+r)^n - 1)`.
///
/// A zero rate has no annuity denominator and falls back to straight-line
/// repayment; a zero-month term cannot amortize a positive principal.
pub fn monthly_payment(
    principal: f64,
    monthly_rate: f64,
    total_months: u32,
) -> Result<f64, SimulationError> {
    if principal <= 0.0 {
        return Ok(0.0);
    }
    if total_months == 0 {
        return Err(SimulationError::DegenerateAmortization(
            "cannot amortize a positive principal over zero months".to_string(),
        ));
    }
    if monthly_rate == 0.0 {
        return Ok(principal / f64::from(total_months));
    }
    let growth = (1.0 + monthly_rate).powi(total_months as i32);
    Ok(principal * monthly_rate * growth / (growth - 1.0))
}

/// Simulates a mortgage month by month after applying the lump sum, and
/// returns the total interest paid.
///
/// Each month accrues `remaining * rate/12` interest and retires
/// `max(payment - interest, 0)` of principal; the loop stops as soon as the
/// balance is cleared. A lump sum covering the whole balance pays zero
/// interest without ever computing a payment.
pub fn simulate_mortgage(terms: &MortgageTerms) -> Result<MortgageResult, SimulationError> {
    terms.validate()?;

    let balance = terms.balance.to_f64().unwrap_or(0.0);
    let lump_sum = terms.lump_sum.to_f64().unwrap_or(0.0);
    let mut remaining = (balance - lump_sum).max(0.0);

    if remaining == 0.0 {
        return Ok(MortgageResult {
            total_interest: Decimal::ZERO,
            months_elapsed: 0,
            monthly_payment: Decimal::ZERO,
        });
    }

    let monthly_rate = terms.interest_rate / 12.0;
    let total_months = terms.term_years * 12;
    let payment = monthly_payment(remaining, monthly_rate, total_months)?;

    let mut total_interest = 0.0;
    let mut months_elapsed = 0;

    for _ in 0..total_months {
        let interest = remaining * monthly_rate;
        total_interest += interest;

        let principal_repayment = (payment - interest).max(0.0);
        remaining -= principal_repayment;
        months_elapsed += 1;

        if remaining <= 0.0 {
            break;
        }
    }

    Ok(MortgageResult {
        total_interest: Decimal::from_f64(total_interest).unwrap_or(Decimal::ZERO),
        months_elapsed,
        monthly_payment: Decimal::from_f64(payment).unwrap_or(Decimal::ZERO),
    })
}
