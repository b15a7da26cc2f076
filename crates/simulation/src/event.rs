//! Log of life events fired during simulation.
//!
//! Collects `(year, description)` records as paths run and offers the
//! query and sampling helpers the reporting layer consumes.

use crate::rng::VariateSource;
use loansim_domain::events::YearEvent;

/// Event log for collecting fired life events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<YearEvent>,
}

impl EventLog {
    /// Creates a new empty event log.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Records an event.
    pub fn record(&mut self, year: u32, description: String) {
        self.events.push(YearEvent { year, description });
    }

    /// Returns all events in record order.
    #[must_use]
    pub fn events(&self) -> &[YearEvent] {
        &self.events
    }

    /// Returns the events of a specific year.
    #[must_use]
    pub fn events_in_year(&self, year: u32) -> Vec<&YearEvent> {
        self.events.iter().filter(|e| e.year == year).collect()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the log into its events.
    #[must_use]
    pub fn into_events(self) -> Vec<YearEvent> {
        self.events
    }

    /// Up to `n` events drawn without replacement, for display.
    #[must_use]
    pub fn sample<R: VariateSource>(&self, rng: &mut R, n: usize) -> Vec<YearEvent> {
        let mut indices: Vec<usize> = (0..self.events.len()).collect();
        let take = n.min(indices.len());
        // Partial Fisher-Yates over the index vector.
        for i in 0..take {
            let remaining = indices.len() - i;
            let offset = ((rng.uniform01() * remaining as f64) as usize).min(remaining - 1);
            indices.swap(i, i + offset);
        }
        indices[..take]
            .iter()
            .map(|&i| self.events[i].clone())
            .collect()
    }
}
