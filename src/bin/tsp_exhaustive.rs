//! Exhaustive TSP command-line runner.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_tsp_exhaustive::models::{Point, PointSet};
use u_tsp_exhaustive::solver::{available_workers, ExhaustiveSolver, SolverConfig};
use u_tsp_exhaustive::{Error, Result};

const DEMO_CITIES: [(f64, f64); 8] = [
    (0.0, 0.0),
    (2.0, 3.0),
    (5.0, 4.0),
    (1.0, 6.0),
    (4.0, 7.0),
    (2.0, 1.0),
    (4.0, 6.0),
    (5.0, 5.0),
];

#[derive(Parser)]
#[command(name = "tsp-exhaustive")]
#[command(about = "Shortest closed tour by trying every visiting order")]
#[command(version)]
struct Cli {
    /// Points as "x,y;x,y;..."
    #[arg(short, long, conflicts_with_all = ["file", "random"])]
    points: Option<String>,

    /// JSON file holding an array of {"x": .., "y": ..}
    #[arg(short, long, conflicts_with = "random")]
    file: Option<PathBuf>,

    /// Generate this many random points in [0, 100)²
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Number of workers (defaults to available hardware threads)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Run the single-worker sequential scan
    #[arg(long, conflicts_with = "workers")]
    sequential: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let points = load_points(&cli)?;
    let workers = if cli.sequential {
        1
    } else {
        cli.workers.unwrap_or_else(available_workers)
    };

    let result = ExhaustiveSolver::new(SolverConfig::default().with_workers(workers)).solve(&points)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Best route: {:?}", result.route.indices());
        println!("Minimum distance: {:.4}", result.distance);
        println!("Elapsed: {:.6} s ({} workers)", result.elapsed_secs(), result.workers);
    }
    Ok(())
}

fn load_points(cli: &Cli) -> Result<PointSet> {
    if let Some(spec) = &cli.points {
        return parse_points(spec);
    }
    if let Some(path) = &cli.file {
        let text = fs::read_to_string(path).map_err(|e| {
            Error::invalid_input(format!("failed to read {}: {e}", path.display()))
        })?;
        return Ok(serde_json::from_str(&text)?);
    }
    if let Some(n) = cli.random {
        return PointSet::random(n, 100.0, &mut StdRng::seed_from_u64(cli.seed));
    }
    PointSet::from_pairs(&DEMO_CITIES)
}

fn parse_points(spec: &str) -> Result<PointSet> {
    let points = spec
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let (x, y) = pair
                .split_once(',')
                .ok_or_else(|| Error::invalid_input(format!("expected \"x,y\", got \"{pair}\"")))?;
            let parse = |v: &str| {
                v.trim()
                    .parse::<f64>()
                    .map_err(|e| Error::invalid_input(format!("bad coordinate \"{v}\": {e}")))
            };
            Ok(Point::new(parse(x)?, parse(y)?))
        })
        .collect::<Result<Vec<_>>>()?;
    PointSet::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points() {
        let ps = parse_points("0,0; 3,4 ;").expect("valid");
        assert_eq!(ps.len(), 2);
        assert_eq!(*ps.get(1), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_parse_points_errors() {
        assert!(parse_points("").is_err());
        assert!(parse_points("1;2").is_err());
        assert!(parse_points("1,a").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
