//! Closed-tour routing over 2-D points.
//!
//! [`total_distance`] evaluates a tour as a cycle; [`search`] anneals a
//! tour with [`SaRunner`](crate::sa::SaRunner) using the pairwise-swap
//! neighborhood of [`TourProblem`].

mod distance;
mod problem;
mod search;
mod types;

pub use distance::{is_permutation, total_distance};
pub use problem::TourProblem;
pub use search::{random_points, search, search_with_rng, solve};
pub use types::{Point, TourSolution};
