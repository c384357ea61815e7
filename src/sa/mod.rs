//! Simulated Annealing (SA) with an emergent initial temperature.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! Classic SA requires a hand-tuned initial temperature. This variant
//! removes that hyperparameter: the run starts with the temperature unset
//! (every proposal accepted) and adopts the magnitude of the first observed
//! uphill delta as its starting temperature, cooling geometrically from
//! there.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod error;
mod runner;

pub use config::SaConfig;
pub use error::InvalidParameter;
pub use runner::{SaResult, SaRunner};
