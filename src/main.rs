//! Command-line driver: load cities, anneal, report.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use tsp_anneal::dataset::load_n_cities;
use tsp_anneal::sa::{SaConfig, SaRunner};
use tsp_anneal::tour::{random_tour, tour_length};

const DEFAULT_DATASET: &str = "data/cities.json";

fn main() -> ExitCode {
    env_logger::init(); // Log to stderr (run with `RUST_LOG=debug`).

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let dataset_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    print!("Enter number of cities to load: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let n: usize = line.trim().parse()?;

    let mut rng = rand::rng();
    let (points, names) = load_n_cities(&dataset_path, n, &mut rng)?;

    println!("\nLoaded cities:");
    for name in &names {
        println!("{name}");
    }

    let route = random_tour(points.len(), &mut rng);
    let initial_length = tour_length(&points, &route);
    println!("\nInitial tour distance: {initial_length}");

    let config = SaConfig::default();
    let result = SaRunner::run_with_rng(&points, &route, &config, &mut rng)?;

    println!("\nOptimized tour distance: {}", result.best_length);
    println!("Improvement: {}", initial_length - result.best_length);
    Ok(())
}
