//! Point and solution types for closed-tour routing.

use crate::sa::SaStats;

/// An immutable 2-D coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Best tour found by a search, with its cyclic length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourSolution {
    /// Visiting order as a permutation of point indices. The last index
    /// connects back to the first.
    pub tour: Vec<usize>,

    /// Total cyclic Euclidean length of `tour`.
    pub distance: f64,

    /// Counters from the annealing run.
    pub stats: SaStats,
}
