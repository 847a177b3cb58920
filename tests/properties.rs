//! Property-based tests for u-routefinder.
//!
//! Uses proptest to verify route invariants across many random inputs.

use proptest::prelude::*;
use u_routefinder::{
    is_valid_route, AlgorithmConfig, Direction, Point, RouteAlgorithm, RouteError, RouteFinder,
};

// ============================================================================
// Strategies
// ============================================================================

/// Random coordinates for 1-30 points.
fn random_points() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 1..30)
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::East),
        Just(Direction::South),
        Just(Direction::West),
        Just(Direction::North),
        Just(Direction::Any),
    ]
}

/// Cheap annealing settings so each case stays fast.
fn quick_annealing(seed: u64) -> AlgorithmConfig {
    AlgorithmConfig::simulated_annealing()
        .with_annealing_steps(10)
        .with_seed(seed)
}

// ============================================================================
// Route Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_annealing_route_is_permutation(points in random_points(), seed in any::<u64>()) {
        let n = points.len();
        let finder = RouteFinder::with_config(points, quick_annealing(seed)).unwrap();
        let order = finder.shortest_route_order();
        prop_assert!(is_valid_route(&order, n), "invalid route {:?}", order);
    }

    #[test]
    fn prop_nearest_route_is_permutation(points in random_points(), direction in any_direction()) {
        let n = points.len();
        let config = AlgorithmConfig::nearest_neighbour().with_direction(direction);
        let finder = RouteFinder::with_config(points, config).unwrap();
        let order = finder.shortest_route_order();
        prop_assert!(is_valid_route(&order, n), "invalid route {:?}", order);
    }

    #[test]
    fn prop_path_length_matches_order(points in random_points(), seed in any::<u64>()) {
        for config in [quick_annealing(seed), AlgorithmConfig::nearest_neighbour()] {
            let finder = RouteFinder::with_config(points.clone(), config).unwrap();
            let order = finder.shortest_route_order();
            let expected = finder.points().path_length(&order);
            let length = finder.path_length().unwrap();
            prop_assert!((length - expected).abs() < 1e-6, "{} vs {}", length, expected);
        }
    }

    #[test]
    fn prop_annealing_not_worse_than_input_order(points in random_points(), seed in any::<u64>()) {
        let n = points.len();
        let finder = RouteFinder::with_config(points, quick_annealing(seed)).unwrap();
        let identity: Vec<usize> = (0..n).collect();
        let start = finder.points().path_length(&identity);
        finder.solve();
        prop_assert!(finder.path_length().unwrap() <= start + 1e-9);
    }

    #[test]
    fn prop_progress_monotonic_ending_at_one(points in random_points(), seed in any::<u64>()) {
        let finder = RouteFinder::with_config(points, quick_annealing(seed)).unwrap();
        let mut reports = Vec::new();
        finder.solve_with_progress(&mut |v: f64| reports.push(v));

        prop_assert!(!reports.is_empty());
        for window in reports.windows(2) {
            prop_assert!(window[1] >= window[0]);
        }
        prop_assert_eq!(reports.last().copied(), Some(1.0));
    }

    #[test]
    fn prop_sorted_from_slice_matches_route(points in random_points()) {
        let finder = RouteFinder::with_algorithm(points.clone(), RouteAlgorithm::NearestNeighbour)
            .unwrap();
        let as_points: Vec<Point> = points.into_iter().map(Point::from).collect();
        prop_assert_eq!(finder.sorted_from_slice(&as_points).unwrap(), finder.shortest_route());
    }

    #[test]
    fn prop_length_mismatch_rejected(points in random_points(), extra in 1usize..5) {
        let n = points.len();
        let finder = RouteFinder::with_algorithm(points, RouteAlgorithm::NearestNeighbour).unwrap();
        let items = vec![0u8; n + extra];
        prop_assert_eq!(
            finder.sorted_from_slice(&items).unwrap_err(),
            RouteError::LengthMismatch { expected: n, actual: n + extra }
        );
    }

    #[test]
    fn prop_same_seed_same_route(points in random_points(), seed in any::<u64>()) {
        let a = RouteFinder::with_config(points.clone(), quick_annealing(seed)).unwrap();
        let b = RouteFinder::with_config(points, quick_annealing(seed)).unwrap();
        prop_assert_eq!(a.shortest_route_order(), b.shortest_route_order());
    }
}

// ============================================================================
// Fixed Scenarios
// ============================================================================

#[test]
fn unit_square_open_route() {
    let square = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
    for config in [
        AlgorithmConfig::simulated_annealing().with_seed(1),
        AlgorithmConfig::nearest_neighbour(),
    ] {
        let finder = RouteFinder::with_config(square, config).unwrap();
        let order = finder.shortest_route_order();
        assert!(is_valid_route(&order, 4));

        let edges: f64 = order
            .windows(2)
            .map(|w| {
                let (a, b) = (Point::from(square[w[0]]), Point::from(square[w[1]]));
                a.distance(&b)
            })
            .sum();
        let length = finder.path_length().unwrap();
        assert!((length - edges).abs() < 1e-9);
        assert!((length - 30.0).abs() < 1e-9);
    }
}

#[test]
fn east_preference_without_eastern_points_terminates() {
    let points = [(50.0, 0.0), (10.0, 10.0), (0.0, 0.0), (20.0, -5.0), (5.0, 30.0)];
    let config = AlgorithmConfig::nearest_neighbour().with_direction(Direction::East);
    let finder = RouteFinder::with_config(points, config).unwrap();
    let order = finder.shortest_route_order();
    assert!(is_valid_route(&order, points.len()));
    assert!(finder.solve().stats().direction_fallbacks >= 1);
}

#[test]
fn repeated_queries_are_identical() {
    let points: Vec<(f64, f64)> = (0..40)
        .map(|i| ((i * 13 % 40) as f64, ((i * 7) % 11) as f64))
        .collect();
    let finder = RouteFinder::new(points).unwrap();
    let first = finder.shortest_route();
    let order = finder.shortest_route_order();
    let length = finder.path_length();
    assert_eq!(finder.shortest_route(), first);
    assert_eq!(finder.shortest_route_order(), order);
    assert_eq!(finder.path_length(), length);
}
