//! Closed-tour routing as an [`SaProblem`].

use rand::Rng;

use super::distance::total_distance;
use super::types::Point;
use crate::random::random_permutation;
use crate::sa::SaProblem;

/// Closed-tour routing over a borrowed set of points.
///
/// Solutions are permutations of `0..points.len()`. The initial solution
/// is a uniformly shuffled permutation and neighbors are produced by
/// swapping two positions drawn uniformly with replacement, so a
/// neighbor may equal its source.
#[derive(Debug, Clone, Copy)]
pub struct TourProblem<'a> {
    points: &'a [Point],
}

impl<'a> TourProblem<'a> {
    pub fn new(points: &'a [Point]) -> Self {
        Self { points }
    }
}

impl SaProblem for TourProblem<'_> {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        random_permutation(self.points.len(), rng)
    }

    fn cost(&self, tour: &Vec<usize>) -> f64 {
        total_distance(self.points, tour)
    }

    fn neighbor<R: Rng + ?Sized>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let mut candidate = tour.clone();
        let i = rng.random_range(0..candidate.len());
        let j = rng.random_range(0..candidate.len());
        candidate.swap(i, j);
        candidate
    }
}
