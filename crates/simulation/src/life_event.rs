//! Yearly life-event draws.
//!
//! Once per simulated year the engine decides whether a life event fires
//! and what it does to the year's salary and to the loan balance. The
//! caller applies the returned effects to its own state; this module only
//! consumes draws.

use crate::rng::VariateSource;
use loansim_domain::config::LifeEventConfig;
use loansim_domain::enums::JobChangeDirection;
use loansim_domain::errors::SimulationError;
use loansim_domain::events::LifeEvent;

/// Annual probability that any life event fires. Fixed, not configurable.
pub const EVENT_PROBABILITY: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Pregnancy,
    Layoff,
    SickLeave,
    JobChange,
}

const CATEGORY_WEIGHTS: [(Category, f64); 4] = [
    (Category::Pregnancy, 0.3),
    (Category::Layoff, 0.3),
    (Category::SickLeave, 0.2),
    (Category::JobChange, 0.2),
];

/// How a fired event changes the year's salary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryEffect {
    /// No change.
    Unchanged,
    /// Salary is replaced outright (pregnancy sets it to zero).
    Override(f64),
    /// Salary is scaled by a factor.
    Multiply(f64),
}

impl SalaryEffect {
    /// Applies the effect to a salary.
    #[must_use]
    pub fn apply(&self, salary: f64) -> f64 {
        match *self {
            Self::Unchanged => salary,
            Self::Override(value) => value,
            Self::Multiply(factor) => salary * factor,
        }
    }
}

/// Outcome of one yearly draw.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeEventOutcome {
    /// The event that applied (or [`LifeEvent::None`]).
    pub event: LifeEvent,
    /// Effect on the year's salary.
    pub salary_effect: SalaryEffect,
    /// Fraction of a full year's interest charged to the balance on top of
    /// normal accrual (0.75 for nine months away, and so on).
    pub interest_surcharge: f64,
    /// Description of the applied event, for reporting.
    pub description: Option<String>,
}

impl LifeEventOutcome {
    fn none() -> Self {
        Self {
            event: LifeEvent::None,
            salary_effect: SalaryEffect::Unchanged,
            interest_surcharge: 0.0,
            description: None,
        }
    }

    fn applied(event: LifeEvent, salary_effect: SalaryEffect, surcharge: f64, config: &LifeEventConfig) -> Self {
        let description = event.describe(config.paycut_pct, config.payrise_pct);
        Self {
            event,
            salary_effect,
            interest_surcharge: surcharge,
            description,
        }
    }
}

/// Decides whether a life event fires this year and what it does.
///
/// The category draw is consumed even when the drawn category's toggle is
/// disabled; a disabled category simply applies no effect. The job-change
/// direction sub-draw is the one exception: it is only consumed when job
/// changes are enabled.
pub fn maybe_trigger<R: VariateSource + ?Sized>(
    rng: &mut R,
    config: &LifeEventConfig,
) -> Result<LifeEventOutcome, SimulationError> {
    if rng.uniform01() >= EVENT_PROBABILITY {
        return Ok(LifeEventOutcome::none());
    }

    let category = rng.categorical(&CATEGORY_WEIGHTS)?;
    match category {
        Category::Pregnancy if config.pregnancy => Ok(LifeEventOutcome::applied(
            LifeEvent::Pregnancy,
            SalaryEffect::Override(0.0),
            0.75,
            config,
        )),
        Category::Layoff if config.layoff => Ok(LifeEventOutcome::applied(
            LifeEvent::Layoff,
            SalaryEffect::Multiply(0.5),
            0.5,
            config,
        )),
        Category::SickLeave if config.sick_leave => Ok(LifeEventOutcome::applied(
            LifeEvent::SickLeave,
            SalaryEffect::Multiply(0.8),
            0.25,
            config,
        )),
        Category::JobChange if config.job_change => {
            let direction = rng.categorical(&[
                (JobChangeDirection::Paycut, 0.5),
                (JobChangeDirection::Payrise, 0.5),
            ])?;
            let factor = match direction {
                JobChangeDirection::Paycut => 1.0 - config.paycut_pct / 100.0,
                JobChangeDirection::Payrise => 1.0 + config.payrise_pct / 100.0,
            };
            Ok(LifeEventOutcome::applied(
                LifeEvent::JobChange { direction },
                SalaryEffect::Multiply(factor),
                0.0,
                config,
            ))
        }
        _ => Ok(LifeEventOutcome::none()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;

    #[test]
    fn test_no_event_above_threshold() {
        let mut rng = ScriptedSource::new(vec![0.5], Vec::new());
        let outcome = maybe_trigger(&mut rng, &LifeEventConfig::all_enabled()).unwrap();
        assert_eq!(outcome.event, LifeEvent::None);
        assert_eq!(outcome.salary_effect, SalaryEffect::Unchanged);
        assert_eq!(outcome.interest_surcharge, 0.0);
        // Only the trigger draw was consumed.
        assert_eq!(rng.remaining_uniforms(), 0);
    }

    #[test]
    fn test_pregnancy_zeroes_salary_and_surcharges_interest() {
        let mut rng = ScriptedSource::new(vec![0.05, 0.1], Vec::new());
        let outcome = maybe_trigger(&mut rng, &LifeEventConfig::all_enabled()).unwrap();
        assert_eq!(outcome.event, LifeEvent::Pregnancy);
        assert_eq!(outcome.salary_effect.apply(40_000.0), 0.0);
        assert_eq!(outcome.interest_surcharge, 0.75);
        assert!(outcome.description.unwrap().contains("Pregnancy"));
    }

    #[test]
    fn test_layoff_and_sick_leave_scale_salary() {
        let mut rng = ScriptedSource::new(vec![0.05, 0.45], Vec::new());
        let outcome = maybe_trigger(&mut rng, &LifeEventConfig::all_enabled()).unwrap();
        assert_eq!(outcome.event, LifeEvent::Layoff);
        assert_eq!(outcome.salary_effect.apply(40_000.0), 20_000.0);
        assert_eq!(outcome.interest_surcharge, 0.5);

        let mut rng = ScriptedSource::new(vec![0.05, 0.7], Vec::new());
        let outcome = maybe_trigger(&mut rng, &LifeEventConfig::all_enabled()).unwrap();
        assert_eq!(outcome.event, LifeEvent::SickLeave);
        assert_eq!(outcome.salary_effect.apply(40_000.0), 32_000.0);
        assert_eq!(outcome.interest_surcharge, 0.25);
    }

    #[test]
    fn test_job_change_draws_direction() {
        let config = LifeEventConfig::all_enabled()
            .with_paycut_pct(20.0)
            .with_payrise_pct(10.0);

        let mut rng = ScriptedSource::new(vec![0.05, 0.9, 0.2], Vec::new());
        let outcome = maybe_trigger(&mut rng, &config).unwrap();
        assert_eq!(
            outcome.event,
            LifeEvent::JobChange {
                direction: JobChangeDirection::Paycut
            }
        );
        assert_eq!(outcome.salary_effect.apply(40_000.0), 32_000.0);

        let mut rng = ScriptedSource::new(vec![0.05, 0.9, 0.7], Vec::new());
        let outcome = maybe_trigger(&mut rng, &config).unwrap();
        assert_eq!(
            outcome.event,
            LifeEvent::JobChange {
                direction: JobChangeDirection::Payrise
            }
        );
        let salary = outcome.salary_effect.apply(40_000.0);
        assert!((salary - 44_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_disabled_event_still_consumes_category_draw() {
        let config = LifeEventConfig {
            pregnancy: false,
            ..LifeEventConfig::all_enabled()
        };
        let mut rng = ScriptedSource::new(vec![0.05, 0.1], Vec::new());
        let outcome = maybe_trigger(&mut rng, &config).unwrap();
        // The pregnancy draw landed but applies nothing.
        assert_eq!(outcome.event, LifeEvent::None);
        assert_eq!(outcome.salary_effect, SalaryEffect::Unchanged);
        // Both the trigger and the category draw were consumed.
        assert_eq!(rng.remaining_uniforms(), 0);
    }

    #[test]
    fn test_disabled_job_change_skips_direction_draw() {
        let config = LifeEventConfig {
            job_change: false,
            ..LifeEventConfig::all_enabled()
        };
        let mut rng = ScriptedSource::new(vec![0.05, 0.9, 0.2], Vec::new());
        let outcome = maybe_trigger(&mut rng, &config).unwrap();
        assert_eq!(outcome.event, LifeEvent::None);
        // The direction draw stays in the queue.
        assert_eq!(rng.remaining_uniforms(), 1);
    }
}
