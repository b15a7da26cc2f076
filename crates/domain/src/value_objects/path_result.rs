use crate::events::YearEvent;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One simulated loan lifetime.
///
/// Immutable after construction and owned exclusively by the trial that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// End-of-year balances, floored at zero. Shorter than the loan term
    /// iff the balance reached zero before the term ended.
    pub trajectory: Vec<Decimal>,
    /// The annual salary growth rate drawn once for this path.
    pub growth_rate: f64,
    /// Total interest charged over the path, per the policy's reporting
    /// rule. Only meaningful as an aggregate under
    /// [`crate::enums::RepaymentPolicy::InterestFirst`].
    pub total_interest: Decimal,
    /// Life events that fired, in year order.
    pub events: Vec<YearEvent>,
    /// Whether the remaining balance was forgiven at end of term.
    pub written_off: bool,
}

impl PathResult {
    /// The balance the path ends with: the last trajectory value, or zero
    /// for an empty trajectory or a written-off path.
    #[must_use]
    pub fn final_balance(&self) -> Decimal {
        if self.written_off {
            return Decimal::ZERO;
        }
        self.trajectory.last().copied().unwrap_or(Decimal::ZERO)
    }

    /// Whether the loan was repaid within the term.
    #[must_use]
    pub fn paid_off(&self, term_years: u32) -> bool {
        self.trajectory.len() < term_years as usize
            || self.trajectory.last().copied().unwrap_or(Decimal::ZERO) == Decimal::ZERO
    }

    /// Value used to rank paths for representative selection: the final
    /// trajectory value for full-length paths, zero for paths that
    /// terminated early. Write-off does not change the ranking; a
    /// written-off path still ran the full term.
    #[must_use]
    pub fn ranking_balance(&self, term_years: u32) -> Decimal {
        if self.trajectory.len() < term_years as usize {
            Decimal::ZERO
        } else {
            self.trajectory.last().copied().unwrap_or(Decimal::ZERO)
        }
    }
}
