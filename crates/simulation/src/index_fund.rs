//! Lump-sum index-fund projection.
//!
//! The third leg of the lump-sum comparison: instead of overpaying the
//! loan or the mortgage, invest the lump sum at a normally distributed
//! annual return and report the mean gain.

use crate::rng::VariateSource;
use loansim_domain::errors::SimulationError;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Mean gain from investing `lump_sum` for `years` at an annual return
/// drawn fresh each year from `Normal(return_mean, return_std)`.
pub fn simulate_index_fund<R: VariateSource>(
    lump_sum: Decimal,
    return_mean: f64,
    return_std: f64,
    years: u32,
    iterations: usize,
    rng: &mut R,
) -> Result<Decimal, SimulationError> {
    if iterations < 1 {
        return Err(SimulationError::InvalidConfiguration(
            "iteration count must be at least 1".to_string(),
        ));
    }
    if !return_std.is_finite() || return_std < 0.0 {
        return Err(SimulationError::InvalidConfiguration(format!(
            "return std dev must be non-negative, got {return_std}"
        )));
    }

    let start = lump_sum.to_f64().unwrap_or(0.0);
    let mut total_future_value = 0.0;

    for _ in 0..iterations {
        let mut value = start;
        for _ in 0..years {
            value *= 1.0 + rng.normal(return_mean, return_std)?;
        }
        total_future_value += value;
    }

    let mean_future_value = total_future_value / iterations as f64;
    Ok(Decimal::from_f64(mean_future_value - start).unwrap_or(Decimal::ZERO))
}
