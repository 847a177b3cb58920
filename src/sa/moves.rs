//! Route moves used by the annealer.
//!
//! Moves act on positions `1..n` of an open route; position 0 (the start
//! point) never moves. Each move knows the change in path length it
//! causes from the handful of edges it touches, so proposals are priced
//! in O(1) and only applied when accepted.

use crate::geometry::PointSet;
use rand::Rng;

/// A local change to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Move {
    /// Reverse `route[a..=b]`, with `1 <= a < b < n`.
    Reverse { a: usize, b: usize },

    /// Cut `route[a..=b]` out and re-insert it directly after the element
    /// currently at position `after`, optionally reversed.
    ///
    /// `after` lies outside `a - 1..=b`.
    Transport {
        a: usize,
        b: usize,
        after: usize,
        reversed: bool,
    },
}

impl Move {
    /// Draws a random move for a route of `n` points.
    ///
    /// Returns `None` when fewer than two positions can move (`n < 3`).
    pub(crate) fn propose<R: Rng>(n: usize, rng: &mut R) -> Option<Move> {
        if n < 3 {
            return None;
        }
        let movable = n - 1;

        if rng.random_bool(0.5) {
            let i = rng.random_range(1..n);
            let mut j = rng.random_range(1..n - 1);
            if j >= i {
                j += 1;
            }
            Some(Move::Reverse {
                a: i.min(j),
                b: i.max(j),
            })
        } else {
            let len = rng.random_range(1..movable);
            let a = rng.random_range(1..=n - len);
            let b = a + len - 1;
            // Insertion slots: after positions 0..a-1 (exclusive) or b+1..n.
            let slots = movable - len;
            let r = rng.random_range(0..slots);
            let after = if r < a - 1 { r } else { b + 2 + r - a };
            Some(Move::Transport {
                a,
                b,
                after,
                reversed: rng.random_bool(0.5),
            })
        }
    }

    /// Change in open path length if this move were applied to `route`.
    pub(crate) fn delta(&self, route: &[usize], points: &PointSet) -> f64 {
        let n = route.len();
        let d = |i: usize, j: usize| points.dist(i, j);

        match *self {
            Move::Reverse { a, b } => {
                let prev = route[a - 1];
                let mut delta = d(prev, route[b]) - d(prev, route[a]);
                if b + 1 < n {
                    let next = route[b + 1];
                    delta += d(route[a], next) - d(route[b], next);
                }
                delta
            }
            Move::Transport {
                a,
                b,
                after,
                reversed,
            } => {
                let prev = route[a - 1];
                let (first, last) = if reversed {
                    (route[b], route[a])
                } else {
                    (route[a], route[b])
                };

                // Close the gap left by the segment.
                let mut delta = -d(prev, route[a]);
                if b + 1 < n {
                    let next = route[b + 1];
                    delta += d(prev, next) - d(route[b], next);
                }

                // Open the gap after `after` and splice the segment in.
                let anchor = route[after];
                delta += d(anchor, first);
                if after + 1 < n {
                    let follower = route[after + 1];
                    delta += d(last, follower) - d(anchor, follower);
                }
                delta
            }
        }
    }

    /// Applies the move to `route` in place.
    pub(crate) fn apply(&self, route: &mut Vec<usize>) {
        match *self {
            Move::Reverse { a, b } => route[a..=b].reverse(),
            Move::Transport {
                a,
                b,
                after,
                reversed,
            } => {
                let mut segment: Vec<usize> = route.drain(a..=b).collect();
                if reversed {
                    segment.reverse();
                }
                let at = if after < a {
                    after + 1
                } else {
                    after + 1 - segment.len()
                };
                route.splice(at..at, segment);
            }
        }
    }
}
