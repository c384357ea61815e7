//! Traveling Salesman approximation via Simulated Annealing.
//!
//! Searches the space of permutations of a fixed set of 2D points for one
//! minimizing total closed-tour Euclidean length. The annealing loop does
//! not take a hand-tuned starting temperature: the run calibrates itself
//! from the magnitude of the first cost-increasing move it observes, on the
//! premise that early random proposals are representative of the typical
//! "bad move" for the instance. Until that first uphill move, the search is
//! a free random walk (every proposal accepted).
//!
//! # Modules
//!
//! - [`tour`]: closed-tour length evaluation and permutation helpers over
//!   2D points.
//! - [`sa`]: the annealing optimizer: transposition neighbors with
//!   Metropolis acceptance, emergent temperature, geometric cooling.
//! - [`dataset`]: loading of named city coordinates from a JSON dataset,
//!   sampled without replacement.
//!
//! # Example
//!
//! ```
//! use tsp_anneal::sa::{SaConfig, SaRunner};
//! use tsp_anneal::tour::{tour_length, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//! ];
//! // A crossed (suboptimal) tour of the unit square.
//! let initial = vec![0, 2, 1, 3];
//!
//! let config = SaConfig::default().with_seed(42);
//! let result = SaRunner::run(&points, &initial, &config).unwrap();
//!
//! assert!(result.best_length <= tour_length(&points, &initial));
//! ```

pub mod dataset;
pub mod sa;
pub mod tour;
