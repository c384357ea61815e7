//! City dataset loading.
//!
//! Supplies named 2D locations to seed the optimizer: records are read
//! from a JSON array of `{city, state, latitude, longitude}` objects and
//! sampled without replacement. The optimizer itself never touches this
//! module; loader failures surface to the driver as [`DatasetError`].

mod loader;
mod types;

pub use loader::{load_n_cities, load_records, DatasetError};
pub use types::CityRecord;
