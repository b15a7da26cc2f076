//! Random variate sources.
//!
//! Every stochastic component draws through the [`VariateSource`] trait so
//! that generators are injected explicitly: seeded for reproducible runs
//! and tests, OS-entropy for production, or scripted for replaying exact
//! draw sequences.

use loansim_domain::errors::SimulationError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::collections::VecDeque;

/// Tolerance when checking that categorical probabilities sum to one.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Supplier of the random draws used throughout the engine.
///
/// No side effects beyond internal generator state advancement.
pub trait VariateSource {
    /// One uniform draw in `[0, 1)`.
    fn uniform01(&mut self) -> f64;

    /// One draw from `Normal(mean, std_dev)`.
    fn normal(&mut self, mean: f64, std_dev: f64) -> Result<f64, SimulationError>;

    /// Draws one label from a categorical distribution.
    ///
    /// Probabilities must be non-negative and sum to one within
    /// [`PROBABILITY_TOLERANCE`]. Consumes exactly one uniform draw.
    fn categorical<T: Copy>(&mut self, outcomes: &[(T, f64)]) -> Result<T, SimulationError> {
        if outcomes.is_empty() {
            return Err(SimulationError::InvalidProbabilities(
                "outcome list is empty".to_string(),
            ));
        }
        let mut sum = 0.0;
        for &(_, p) in outcomes {
            if !p.is_finite() || p < 0.0 {
                return Err(SimulationError::InvalidProbabilities(format!(
                    "probabilities must be non-negative and finite, got {p}"
                )));
            }
            sum += p;
        }
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(SimulationError::InvalidProbabilities(format!(
                "probabilities sum to {sum}, expected 1"
            )));
        }

        let u = self.uniform01();
        let mut cumulative = 0.0;
        for &(label, p) in outcomes {
            cumulative += p;
            if u < cumulative {
                return Ok(label);
            }
        }
        // Floating slack at the top of the cumulative scale.
        Ok(outcomes[outcomes.len() - 1].0)
    }
}

/// Pseudo-random source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// Creates a source with a fixed seed, for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl VariateSource for StdRandomSource {
    fn uniform01(&mut self) -> f64 {
        self.rng.random()
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> Result<f64, SimulationError> {
        if std_dev == 0.0 {
            return Ok(mean);
        }
        let normal = Normal::new(mean, std_dev).map_err(|_| {
            SimulationError::InvalidConfiguration(format!(
                "invalid normal parameters: mean {mean}, std dev {std_dev}"
            ))
        })?;
        Ok(normal.sample(&mut self.rng))
    }
}

/// Replays fixed queues of draws.
///
/// `uniform01` pops from the uniform queue and falls back to `1.0` when
/// exhausted (so no probability-gated branch ever fires); `normal` pops a
/// standard-normal `z` and returns `mean + std_dev * z`, falling back to
/// `z = 0` (the mean). The stochastic counterpart of a deterministic
/// price path: it lets tests pin down exact draw sequences.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    uniforms: VecDeque<f64>,
    normals: VecDeque<f64>,
}

impl ScriptedSource {
    /// Creates a scripted source from uniform draws and standard-normal
    /// `z` values.
    #[must_use]
    pub fn new(uniforms: Vec<f64>, normals: Vec<f64>) -> Self {
        Self {
            uniforms: uniforms.into(),
            normals: normals.into(),
        }
    }

    /// A source whose every branch takes the "nothing happens" side:
    /// uniforms are all `1.0` and normals collapse to their mean.
    #[must_use]
    pub fn inert() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Uniform draws not yet consumed.
    #[must_use]
    pub fn remaining_uniforms(&self) -> usize {
        self.uniforms.len()
    }
}

impl VariateSource for ScriptedSource {
    fn uniform01(&mut self) -> f64 {
        self.uniforms.pop_front().unwrap_or(1.0)
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> Result<f64, SimulationError> {
        let z = self.normals.pop_front().unwrap_or(0.0);
        Ok(mean + std_dev * z)
    }
}
