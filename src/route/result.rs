//! Route result.

use super::config::RouteAlgorithm;

/// Diagnostics from the solver that produced a route.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolveStats {
    /// Proposed moves (annealing only).
    pub iterations: usize,
    /// Accepted moves (annealing only).
    pub accepted_moves: usize,
    /// Improving moves (annealing only).
    pub improving_moves: usize,
    /// Temperature after the last annealing step.
    pub final_temperature: Option<f64>,
    /// Times the nearest-neighbour direction preference had to be dropped.
    pub direction_fallbacks: usize,
}

/// A computed route over a point set.
///
/// `order` is a permutation of `0..n` beginning with 0, and
/// `path_length` is the open path length along it (no closing edge).
/// A result that is not `done` is a placeholder; its length is 0 and
/// meaningless.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    order: Vec<usize>,
    path_length: f64,
    done: bool,
    algorithm: RouteAlgorithm,
    stats: SolveStats,
}

impl RouteResult {
    pub(crate) fn completed(
        order: Vec<usize>,
        path_length: f64,
        algorithm: RouteAlgorithm,
        stats: SolveStats,
    ) -> Self {
        Self {
            order,
            path_length,
            done: true,
            algorithm,
            stats,
        }
    }

    /// Placeholder for a route over `n` points that has not been solved.
    pub fn pending(n: usize, algorithm: RouteAlgorithm) -> Self {
        Self {
            order: (0..n).collect(),
            path_length: 0.0,
            done: false,
            algorithm,
            stats: SolveStats::default(),
        }
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// 1-based visit order, for display.
    pub fn order_one_based(&self) -> Vec<usize> {
        self.order.iter().map(|&i| i + 1).collect()
    }

    pub fn path_length(&self) -> f64 {
        self.path_length
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn algorithm(&self) -> RouteAlgorithm {
        self.algorithm
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}
