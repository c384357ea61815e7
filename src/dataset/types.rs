//! Dataset record types.

use serde::Deserialize;

use crate::tour::Point;

/// One named location in the dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRecord {
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityRecord {
    /// Coordinates as a point, each axis rounded to 6 decimal places.
    pub fn position(&self) -> Point {
        Point::new(round6(self.latitude), round6(self.longitude))
    }

    /// Display label, e.g. `"Portland, Oregon"`.
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}
