//! NN construction loop.
//!
//! # Algorithm
//!
//! 1. Start at point 0 and mark it visited
//! 2. Among unvisited points admitted by the direction preference, move to
//!    the closest (lowest index on ties)
//! 3. If none is admitted, move to the closest unvisited point instead
//! 4. Repeat until every point is visited

use super::config::{Direction, NnConfig};
use crate::geometry::PointSet;

/// Result of a nearest-neighbour run.
#[derive(Debug, Clone)]
pub struct NnResult {
    /// Visit order, starting at 0.
    pub order: Vec<usize>,

    /// Open path length of `order`.
    pub length: f64,

    /// How many times no point lay in the preferred direction and the
    /// nearest point overall was taken instead.
    pub direction_fallbacks: usize,
}

/// Executes nearest-neighbour construction.
pub struct NnRunner;

impl NnRunner {
    /// Builds a route greedily from point 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_routefinder::PointSet;
    /// use u_routefinder::nn::{NnConfig, NnRunner};
    ///
    /// let points = PointSet::new(vec![(0.0, 0.0), (5.0, 0.0), (1.0, 0.0)]).unwrap();
    /// let result = NnRunner::run(&points, &NnConfig::default());
    /// assert_eq!(result.order, vec![0, 2, 1]);
    /// assert!((result.length - 5.0).abs() < 1e-12);
    /// ```
    pub fn run(points: &PointSet, config: &NnConfig) -> NnResult {
        let n = points.len();
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut direction_fallbacks = 0usize;

        let mut current = 0usize;
        visited[current] = true;
        order.push(current);

        loop {
            let next = match nearest_unvisited(points, &visited, current, config.direction) {
                Some(i) => i,
                None => match nearest_unvisited(points, &visited, current, Direction::Any) {
                    Some(i) => {
                        direction_fallbacks += 1;
                        i
                    }
                    // Every point has been visited.
                    None => break,
                },
            };

            visited[next] = true;
            order.push(next);
            current = next;
        }

        let length = points.path_length(&order);
        log::debug!(
            "nearest neighbour: n={n} direction={:?} length={length:.3} fallbacks={direction_fallbacks}",
            config.direction
        );

        NnResult {
            order,
            length,
            direction_fallbacks,
        }
    }
}

/// Closest unvisited point admitted by `direction`, lowest index on ties.
///
/// Returns `None` only when no unvisited point is admitted; a distance
/// that overflows to infinity still yields a candidate.
fn nearest_unvisited(
    points: &PointSet,
    visited: &[bool],
    current: usize,
    direction: Direction,
) -> Option<usize> {
    let from = points.point(current);
    let mut best: Option<(usize, f64)> = None;

    for (i, _) in visited.iter().enumerate().filter(|&(_, &v)| !v) {
        if !direction.admits(from, points.point(i)) {
            continue;
        }
        let d = points.dist(current, i);
        // Strict comparison keeps the lowest index on ties.
        match best {
            Some((_, best_dist)) if d >= best_dist => {}
            _ => best = Some((i, d)),
        }
    }

    best.map(|(i, _)| i)
}
