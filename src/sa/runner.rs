//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::Result;
use crate::random::create_rng;
use rand::Rng;
use tracing::{debug, trace};

/// Counters and history collected during a run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaStats {
    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Number of cooling steps applied.
    pub temperature_steps: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of moves with a strictly negative cost delta.
    pub improving_moves: usize,

    /// Incumbent cost after initialization, then after every improvement.
    ///
    /// Strictly decreasing.
    pub incumbent_history: Vec<f64>,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Run counters.
    pub stats: SaStats,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a run-private RNG built from `config.seed`.
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter)
    /// before doing any work if the configuration is invalid.
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::Solution>> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored. The caller owns the random stream, so
    /// concurrent runs must each be handed their own generator.
    pub fn run_with_rng<P: SaProblem, R: Rng + ?Sized>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>> {
        let steps = config.cooling_steps()?;

        // Initialize
        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut stats = SaStats {
            incumbent_history: vec![best_cost],
            ..SaStats::default()
        };

        debug!(
            initial_cost = current_cost,
            initial_temperature = config.initial_temperature,
            min_temperature = config.min_temperature,
            cooling_rate = config.cooling_rate,
            iterations_per_temperature = config.iterations_per_temperature,
            steps,
            "annealing started"
        );

        // `cooling_steps` replays this schedule, so the loop ends exactly
        // when the temperature first drops to the floor.
        for step in 0..steps {
            for _ in 0..config.iterations_per_temperature {
                let neighbor = problem.neighbor(&current, rng);
                let neighbor_cost = problem.cost(&neighbor);
                let delta = neighbor_cost - current_cost;

                // Metropolis acceptance criterion
                let accept = if delta < 0.0 {
                    stats.improving_moves += 1;
                    true
                } else {
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                };

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    stats.accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                        stats.incumbent_history.push(best_cost);
                    }
                }

                stats.iterations += 1;
            }

            trace!(
                step,
                temperature,
                current_cost,
                best_cost,
                "temperature step finished"
            );

            // Cool down
            temperature *= config.cooling_rate;
            stats.temperature_steps += 1;
        }

        stats.final_temperature = temperature;

        debug!(
            best_cost,
            iterations = stats.iterations,
            temperature_steps = stats.temperature_steps,
            accepted_moves = stats.accepted_moves,
            improving_moves = stats.improving_moves,
            "annealing finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            stats,
        })
    }
}
