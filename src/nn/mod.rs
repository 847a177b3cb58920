//! Nearest Neighbour (NN) route construction.
//!
//! A greedy constructive heuristic: starting at point 0, always move to
//! the closest point not yet visited. Optionally prefers candidates lying
//! in one compass direction from the current point.
//!
//! Deterministic and O(n²). Typically 20–25% longer than optimal on
//! uniformly random instances, but a useful warm start for annealing.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem"

mod config;
mod runner;

pub use config::{Direction, NnConfig};
pub use runner::{NnResult, NnRunner};
