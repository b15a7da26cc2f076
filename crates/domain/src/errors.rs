use thiserror::Error;

/// Errors raised before or during a simulation run.
///
/// Every variant is detected synchronously from the inputs; nothing here is
/// transient or retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A configuration value is out of range (negative rate, zero-length
    /// term, iteration count below one, and so on).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A categorical probability vector is malformed.
    #[error("invalid probability vector: {0}")]
    InvalidProbabilities(String),
    /// The amortization inputs admit no well-defined payment schedule.
    #[error("degenerate amortization: {0}")]
    DegenerateAmortization(String),
}
