use serde::{Deserialize, Serialize};

/// Ordering of interest accrual versus repayment within one simulated year.
///
/// Both orderings are legitimate readings of income-contingent repayment;
/// the choice is a configuration decision, never a runtime branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepaymentPolicy {
    /// Accrue a full year of interest, then subtract a flat repayment of
    /// `(salary - threshold) * repayment_rate` when salary is above the
    /// threshold. The reported interest figure is the full accrual.
    AccrueThenRepay,
    /// Allocate the repayment to interest first and only the remainder to
    /// principal. Interest is only charged to the reported figure while the
    /// salary is above the threshold.
    InterestFirst,
}

/// Direction of a job-change life event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobChangeDirection {
    Paycut,
    Payrise,
}

/// Whether an unpaid balance is forgiven at the end of a long term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteOffRule {
    /// The balance is carried indefinitely.
    Never,
    /// A path still carrying balance after a term of at least this many
    /// years is marked written off and reports a zero final balance.
    AfterYears(u32),
}
