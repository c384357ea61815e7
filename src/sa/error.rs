//! Optimizer precondition violations.

use thiserror::Error;

/// Malformed optimizer input.
///
/// Surfaced immediately by [`SaRunner::run`](super::SaRunner::run) before
/// any proposal is evaluated; no partial work is performed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameter {
    /// The geometric cooling factor must lie strictly between 0 and 1.
    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRate(f64),

    /// At least one outer sampling round is required.
    #[error("max_iterations must be at least 1")]
    MaxIterations,

    /// At least one proposal per round is required.
    #[error("samples_per_temperature must be at least 1")]
    SamplesPerTemperature,

    /// A meaningful tour visits at least two points.
    #[error("tour must visit at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// The tour must index exactly the provided points.
    #[error("tour has {tour_len} positions but {point_count} points were given")]
    LengthMismatch {
        tour_len: usize,
        point_count: usize,
    },

    /// The tour must contain each point index exactly once.
    #[error("tour is not a permutation of 0..{0}")]
    NotAPermutation(usize),
}
