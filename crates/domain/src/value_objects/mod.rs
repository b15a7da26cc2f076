pub mod path_result;

pub use path_result::PathResult;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a deterministic mortgage amortization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    /// Total interest paid over the life of the mortgage.
    pub total_interest: Decimal,
    /// Months until the balance reached zero (or the full term).
    pub months_elapsed: u32,
    /// Fixed monthly payment from the annuity formula.
    pub monthly_payment: Decimal,
}

/// One cell of a parameter sweep comparing loan interest against mortgage
/// interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    /// Starting salary for the loan scenario.
    pub salary: Decimal,
    /// Loan interest rate.
    pub loan_rate: f64,
    /// Mortgage interest rate.
    pub mortgage_rate: f64,
    /// Lump sum applied to the mortgage.
    pub lump_sum: Decimal,
    /// Mean total loan interest across the cell's trials.
    pub loan_interest: Decimal,
    /// Total mortgage interest for the cell.
    pub mortgage_interest: Decimal,
    /// `loan_interest - mortgage_interest`.
    pub difference: Decimal,
}
