//! Tours over 2D points.
//!
//! A tour is a permutation of indices into a fixed point array and
//! represents a closed route: the last point connects back to the first.
//! Points never change after load; all search state lives in the
//! permutation.

mod length;
mod types;

pub use length::{is_permutation, random_tour, tour_length};
pub use types::{Point, Tour};
