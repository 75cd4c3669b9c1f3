//! Simulated annealing for closed 2-D tours.
//!
//! Finds a short visiting order for a fixed set of points, treating the
//! order as a closed cycle (the last stop returns to the first):
//!
//! - **Tour evaluation** ([`tour::total_distance`]): cyclic Euclidean
//!   length of a permutation of point indices.
//! - **Simulated Annealing** ([`sa`]): problem-agnostic runner with
//!   geometric cooling, Metropolis acceptance and incumbent tracking.
//! - **Tour search** ([`tour::search`]): the routing problem (random
//!   initial permutation, pairwise-swap neighborhood) wired to the runner.
//!
//! # Example
//!
//! ```
//! use u_tour_anneal::sa::SaConfig;
//! use u_tour_anneal::tour::{random_points, search};
//!
//! let points = random_points(20, 100.0, 42).unwrap();
//! let config = SaConfig::default()
//!     .with_iterations_per_temperature(100)
//!     .with_seed(7);
//!
//! let solution = search(&points, &config).unwrap();
//! assert_eq!(solution.tour.len(), 20);
//! ```
//!
//! Runs are single-threaded and perform no I/O. Progress is reported
//! through `tracing` events at `debug` and `trace` level.

pub mod error;
pub mod random;
pub mod sa;
pub mod tour;

pub use error::{Error, Result};
