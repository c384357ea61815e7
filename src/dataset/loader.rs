//! Reading and sampling the city dataset.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;

use super::types::CityRecord;
use crate::tour::Point;

/// Loader-side failure. The optimizer never sees this category.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset file {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("requested {requested} cities but the dataset holds only {available}")]
    NotEnoughCities { requested: usize, available: usize },
}

/// Reads all records from a JSON dataset file.
pub fn load_records(path: &Path) -> Result<Vec<CityRecord>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| DatasetError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads `n` distinct cities drawn without replacement from the dataset.
///
/// Returns coordinates (latitude, longitude rounded to 6 decimal places)
/// and display labels in matching order.
pub fn load_n_cities<R: Rng + ?Sized>(
    path: &Path,
    n: usize,
    rng: &mut R,
) -> Result<(Vec<Point>, Vec<String>), DatasetError> {
    let records = load_records(path)?;
    if n > records.len() {
        return Err(DatasetError::NotEnoughCities {
            requested: n,
            available: records.len(),
        });
    }

    let picked: Vec<&CityRecord> = records.choose_multiple(rng, n).collect();
    let points = picked.iter().map(|r| r.position()).collect();
    let labels = picked.iter().map(|r| r.label()).collect();
    Ok((points, labels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"city": "Portland", "state": "Oregon", "latitude": 45.523064, "longitude": -122.676483},
        {"city": "Boise", "state": "Idaho", "latitude": 43.615019, "longitude": -116.202314},
        {"city": "Helena", "state": "Montana", "latitude": 46.589146, "longitude": -112.039106},
        {"city": "Salem", "state": "Oregon", "latitude": 44.942898, "longitude": -123.035096},
        {"city": "Olympia", "state": "Washington", "latitude": 47.037872, "longitude": -122.900695}
    ]"#;

    fn write_dataset(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_records() {
        let path = write_dataset("tsp_anneal_test_records.json", SAMPLE);
        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].label(), "Portland, Oregon");
    }

    #[test]
    fn test_load_n_cities_samples_without_replacement() {
        let path = write_dataset("tsp_anneal_test_sample.json", SAMPLE);
        let mut rng = StdRng::seed_from_u64(42);
        let (points, labels) = load_n_cities(&path, 4, &mut rng).unwrap();

        assert_eq!(points.len(), 4);
        assert_eq!(labels.len(), 4);
        let distinct: HashSet<&String> = labels.iter().collect();
        assert_eq!(distinct.len(), 4, "labels must be distinct: {labels:?}");
    }

    #[test]
    fn test_load_n_cities_deterministic_under_seed() {
        let path = write_dataset("tsp_anneal_test_seeded.json", SAMPLE);
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = load_n_cities(&path, 3, &mut a).unwrap();
        let second = load_n_cities(&path, 3, &mut b).unwrap();
        assert_eq!(first.1, second.1);
    }

    #[test]
    fn test_requesting_too_many_cities() {
        let path = write_dataset("tsp_anneal_test_too_many.json", SAMPLE);
        let mut rng = StdRng::seed_from_u64(1);
        let err = load_n_cities(&path, 6, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::NotEnoughCities {
                requested: 6,
                available: 5
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("tsp_anneal_test_does_not_exist.json");
        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_malformed_dataset() {
        let path = write_dataset("tsp_anneal_test_malformed.json", "{ not json ]");
        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Malformed { .. }));
    }
}
