//! SA configuration.

use super::error::InvalidParameter;

/// Configuration for the annealing optimizer.
///
/// There is no initial temperature to configure: the run calibrates its
/// starting temperature from the first uphill move it observes (see
/// [`SaRunner`](super::SaRunner)).
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_cooling_rate(0.98)
///     .with_samples_per_temperature(50)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Geometric cooling factor in (0, 1). Applied once per sampling round,
    /// but only after the temperature has emerged. Higher = slower cooling.
    pub cooling_rate: f64,

    /// Number of outer sampling rounds. The run always executes exactly
    /// this many rounds; there is no early stop.
    pub max_iterations: usize,

    /// Number of sequential neighbor proposals per round.
    pub samples_per_temperature: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            cooling_rate: 0.95,
            max_iterations: 2000,
            samples_per_temperature: 30,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_samples_per_temperature(mut self, n: usize) -> Self {
        self.samples_per_temperature = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        if !self.cooling_rate.is_finite() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(InvalidParameter::CoolingRate(self.cooling_rate));
        }
        if self.max_iterations == 0 {
            return Err(InvalidParameter::MaxIterations);
        }
        if self.samples_per_temperature == 0 {
            return Err(InvalidParameter::SamplesPerTemperature);
        }
        Ok(())
    }
}
