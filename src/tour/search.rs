//! Tour search entry points.

use rand::Rng;

use super::problem::TourProblem;
use super::types::{Point, TourSolution};
use crate::error::{Error, Result};
use crate::random::create_rng;
use crate::sa::{SaConfig, SaRunner};

/// Anneals a closed tour over `points`.
///
/// Parameters are validated before any work. Fails with
/// [`Error::InvalidParameter`] if `points` is empty or `config` is invalid.
///
/// # Examples
///
/// ```
/// use u_tour_anneal::sa::SaConfig;
/// use u_tour_anneal::tour::{search, Point};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.1)
///     .with_cooling_rate(0.9)
///     .with_iterations_per_temperature(200)
///     .with_seed(42);
///
/// let solution = search(&points, &config).unwrap();
/// assert!((solution.distance - 4.0).abs() < 1e-9);
/// ```
pub fn search(points: &[Point], config: &SaConfig) -> Result<TourSolution> {
    let mut rng = create_rng(config.seed);
    search_with_rng(points, config, &mut rng)
}

/// Like [`search`], but draws all randomness from `rng` and ignores
/// `config.seed`.
pub fn search_with_rng<R: Rng + ?Sized>(
    points: &[Point],
    config: &SaConfig,
    rng: &mut R,
) -> Result<TourSolution> {
    check_points(points)?;
    let problem = TourProblem::new(points);
    let result = SaRunner::run_with_rng(&problem, config, rng)?;

    Ok(TourSolution {
        tour: result.best,
        distance: result.best_cost,
        stats: result.stats,
    })
}

/// Positional form of [`search`].
pub fn solve(
    points: &[Point],
    initial_temperature: f64,
    cooling_rate: f64,
    min_temperature: f64,
    iterations_per_temperature: usize,
    seed: Option<u64>,
) -> Result<TourSolution> {
    let config = SaConfig {
        initial_temperature,
        min_temperature,
        cooling_rate,
        iterations_per_temperature,
        seed,
    };
    search(points, &config)
}

/// Generates `n` points uniformly in `[0, extent) x [0, extent)`.
pub fn random_points(n: usize, extent: f64, seed: u64) -> Result<Vec<Point>> {
    if !extent.is_finite() || extent <= 0.0 {
        return Err(Error::invalid_parameter(
            "extent",
            format!("must be positive and finite, got {extent}"),
        ));
    }
    let mut rng = create_rng(Some(seed));
    Ok((0..n)
        .map(|_| Point::new(rng.random_range(0.0..extent), rng.random_range(0.0..extent)))
        .collect())
}

fn check_points(points: &[Point]) -> Result<()> {
    if points.is_empty() {
        return Err(Error::invalid_parameter("points", "must not be empty"));
    }
    Ok(())
}
