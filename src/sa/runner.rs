//! SA execution loop.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use super::error::InvalidParameter;
use crate::tour::{is_permutation, tour_length, Point, Tour};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best tour found.
    pub best: Tour,

    /// Length of the best tour.
    pub best_length: f64,

    /// Total number of neighbor evaluations
    /// (`max_iterations * samples_per_temperature`).
    pub iterations: usize,

    /// Temperature when the run ended. `None` means no uphill move was
    /// ever proposed, so the temperature never emerged.
    pub final_temperature: Option<f64>,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted improving moves.
    pub improving_moves: usize,

    /// Best length after the initial state and after each sampling round.
    pub length_history: Vec<f64>,
}

/// Executes Simulated Annealing over tour permutations.
///
/// The starting temperature is not configured: it emerges as the exact
/// magnitude of the first uphill delta observed during the run. Until then
/// every proposal is accepted (the search behaves as if the temperature
/// were infinite). Once set, the temperature is multiplied by
/// `cooling_rate` after every full sampling round and never reset.
pub struct SaRunner;

impl SaRunner {
    /// Runs the optimizer with an RNG built from `config.seed`.
    pub fn run(
        points: &[Point],
        initial: &[usize],
        config: &SaConfig,
    ) -> Result<SaResult, InvalidParameter> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(points, initial, config, &mut rng)
    }

    /// Runs the optimizer with a caller-supplied random source.
    ///
    /// Given identical inputs and an RNG producing the same draw sequence,
    /// two runs return bit-identical results.
    pub fn run_with_rng<R: Rng>(
        points: &[Point],
        initial: &[usize],
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult, InvalidParameter> {
        config.validate()?;
        validate_tour(points, initial)?;
        let n = initial.len();

        let mut current: Tour = initial.to_vec();
        let mut current_length = tour_length(points, &current);
        let mut best = current.clone();
        let mut best_length = current_length;

        // Emerges from the first uphill delta; None behaves as T = inf.
        let mut temperature: Option<f64> = None;

        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut length_history = Vec::with_capacity(config.max_iterations + 1);
        length_history.push(best_length);

        for _ in 0..config.max_iterations {
            for _ in 0..config.samples_per_temperature {
                let (i, j) = distinct_pair(n, rng);

                let mut candidate = current.clone();
                candidate.swap(i, j);
                let candidate_length = tour_length(points, &candidate);
                let delta = candidate_length - current_length;

                // The first uphill delta becomes the starting temperature,
                // and this same proposal is then judged against it.
                if temperature.is_none() && delta > 0.0 {
                    temperature = Some(delta);
                    debug!("temperature emerged from first uphill move: {delta:.6}");
                }

                let accept = match temperature {
                    None => true,
                    Some(t) => delta < 0.0 || rng.random_range(0.0..1.0) < (-delta / t).exp(),
                };

                if accept {
                    accepted_moves += 1;
                    if delta < 0.0 {
                        improving_moves += 1;
                    }
                    current = candidate;
                    current_length = candidate_length;

                    if current_length < best_length {
                        best = current.clone();
                        best_length = current_length;
                    }
                }
            }

            // Cooling waits for the temperature to emerge.
            if let Some(t) = temperature {
                temperature = Some(t * config.cooling_rate);
            }
            length_history.push(best_length);
        }

        debug!(
            "annealing finished: best length {best_length:.6}, accepted {accepted_moves} \
             of {} proposals ({improving_moves} improving)",
            config.max_iterations * config.samples_per_temperature
        );

        Ok(SaResult {
            best,
            best_length,
            iterations: config.max_iterations * config.samples_per_temperature,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            length_history,
        })
    }
}

/// Two distinct positions drawn uniformly from `0..n`.
fn distinct_pair<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..n);
    // Draw j from the n-1 remaining positions and skip over i.
    let j = rng.random_range(0..n - 1);
    if j >= i {
        (i, j + 1)
    } else {
        (i, j)
    }
}

fn validate_tour(points: &[Point], tour: &[usize]) -> Result<(), InvalidParameter> {
    if points.len() < 2 {
        return Err(InvalidParameter::TooFewPoints(points.len()));
    }
    if tour.len() != points.len() {
        return Err(InvalidParameter::LengthMismatch {
            tour_len: tour.len(),
            point_count: points.len(),
        });
    }
    if !is_permutation(tour) {
        return Err(InvalidParameter::NotAPermutation(tour.len()));
    }
    Ok(())
}
