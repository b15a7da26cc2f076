//! Life events and the per-year records they leave behind.

use crate::enums::JobChangeDirection;
use serde::{Deserialize, Serialize};

/// A randomly triggered income/balance perturbation for one simulated year.
///
/// Produced fresh each year; it never persists beyond the year it affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeEvent {
    /// No event this year.
    None,
    /// Nine months without salary, with interest accruing on the balance.
    Pregnancy,
    /// Six months on reduced income.
    Layoff,
    /// Three months on reduced income.
    SickLeave,
    /// A new job with either a pay cut or a pay rise.
    JobChange {
        /// Which way the salary moved.
        direction: JobChangeDirection,
    },
}

impl LifeEvent {
    /// Human-readable description of an applied event, or `None` for
    /// [`LifeEvent::None`]. The percentages are only used by the
    /// job-change variants.
    #[must_use]
    pub fn describe(&self, paycut_pct: f64, payrise_pct: f64) -> Option<String> {
        match self {
            Self::None => None,
            Self::Pregnancy => Some("Pregnancy event - no salary for 9 months.".to_string()),
            Self::Layoff => Some("Layoff event - reduced salary for 6 months.".to_string()),
            Self::SickLeave => Some("Sick leave event - reduced salary for 3 months.".to_string()),
            Self::JobChange {
                direction: JobChangeDirection::Paycut,
            } => Some(format!("Job change - {paycut_pct}% paycut.")),
            Self::JobChange {
                direction: JobChangeDirection::Payrise,
            } => Some(format!("Job change - {payrise_pct}% payrise.")),
        }
    }

    /// Whether any event actually fired.
    #[must_use]
    pub fn fired(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A life event that fired in a specific simulated year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEvent {
    /// Year of the path in which the event fired (1-based).
    pub year: u32,
    /// Description of the applied event.
    pub description: String,
}
