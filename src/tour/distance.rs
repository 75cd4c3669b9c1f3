//! Tour evaluation.

use super::types::Point;

/// Total cyclic Euclidean length of `tour` over `points`.
///
/// Sums the distance from `points[tour[i]]` to `points[tour[(i + 1) % n]]`
/// for every position, so the last stop connects back to the first. A
/// single-stop tour has length 0.
///
/// `tour` must be a permutation of `0..points.len()` (see
/// [`is_permutation`]); this is not checked here and an index outside
/// `points` panics.
pub fn total_distance(points: &[Point], tour: &[usize]) -> f64 {
    let n = tour.len();
    (0..n)
        .map(|i| points[tour[i]].distance_to(&points[tour[(i + 1) % n]]))
        .sum()
}

/// Whether `tour` contains every index of `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &idx in tour {
        if idx >= n || seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_single_point_is_zero() {
        let points = [Point::new(5.0, 5.0)];
        assert_eq!(total_distance(&points, &[0]), 0.0);
    }

    #[test]
    fn test_two_points_out_and_back() {
        let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        assert!((total_distance(&points, &[0, 1]) - 10.0).abs() < 1e-12);
        assert!((total_distance(&points, &[1, 0]) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_square_perimeter_and_crossing() {
        let points = unit_square();
        assert!((total_distance(&points, &[0, 1, 2, 3]) - 4.0).abs() < 1e-12);

        let crossing = 2.0 + 2.0 * 2f64.sqrt();
        assert!((total_distance(&points, &[0, 2, 1, 3]) - crossing).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_points_are_zero() {
        let points = vec![Point::new(2.0, -1.0); 5];
        assert_eq!(total_distance(&points, &[3, 1, 4, 0, 2]), 0.0);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(is_permutation(&[0], 1));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }

    fn points_and_tour() -> impl Strategy<Value = (Vec<Point>, Vec<usize>)> {
        prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 1..40).prop_flat_map(
            |coords| {
                let n = coords.len();
                let points: Vec<Point> = coords.into_iter().map(Point::from).collect();
                (Just(points), Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
            },
        )
    }

    proptest! {
        #[test]
        fn prop_distance_non_negative((points, tour) in points_and_tour()) {
            prop_assert!(total_distance(&points, &tour) >= 0.0);
        }

        #[test]
        fn prop_rotation_invariant((points, tour) in points_and_tour(), k in 0usize..64) {
            let mut rotated = tour.clone();
            rotated.rotate_left(k % tour.len());
            let a = total_distance(&points, &tour);
            let b = total_distance(&points, &rotated);
            prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
        }

        #[test]
        fn prop_reversal_invariant((points, tour) in points_and_tour()) {
            let mut reversed = tour.clone();
            reversed.reverse();
            let a = total_distance(&points, &tour);
            let b = total_distance(&points, &reversed);
            prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
        }
    }
}
