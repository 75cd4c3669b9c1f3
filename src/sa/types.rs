//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The implementor supplies the initial solution, neighbor generation and
/// cost evaluation. [`SaRunner`](super::SaRunner) owns the temperature,
/// the Metropolis acceptance test and incumbent tracking.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Contract
///
/// `cost` must be deterministic: the runner caches the cost of the
/// current solution instead of re-evaluating it on every iteration.
///
/// `neighbor` must return a fresh value. The runner keeps the current
/// solution and the candidate as separate values and only replaces the
/// incumbent by clone, so nothing is shared between them.
///
/// # Examples
///
/// See [`TourProblem`](crate::tour::TourProblem) for the closed-tour
/// routing problem built on this trait.
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution.
    ///
    /// The neighbor should be "close" to the current solution (small
    /// perturbation) but the neighborhood must be connected. Returning a
    /// neighbor equal to `solution` is allowed.
    fn neighbor<R: Rng + ?Sized>(&self, solution: &Self::Solution, rng: &mut R)
        -> Self::Solution;
}
