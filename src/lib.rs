//! Heuristic shortest-route ordering of 2-D points.
//!
//! Given an ordered list of points, finds a short open route that starts
//! at the first point and visits every other point exactly once (a
//! heuristic solution to the Travelling Salesman Problem):
//!
//! - **Simulated Annealing (SA)**: stochastic refinement with segment
//!   reversal and transport moves, Metropolis acceptance and geometric
//!   cooling, after *Numerical Recipes in C*, §10.9.
//! - **Nearest Neighbour (NN)**: deterministic greedy construction with an
//!   optional compass-direction preference.
//!
//! [`RouteFinder`] wraps both behind a memoizing facade that also reorders
//! caller data (points, arbitrary slices, or objects exposing a
//! [`PointProperty`]) by the computed route.
//!
//! # Examples
//!
//! ```
//! use u_routefinder::{AlgorithmConfig, RouteFinder};
//!
//! let stops = vec![(0.0, 0.0), (8.0, 1.0), (1.0, 1.0), (4.0, 0.0)];
//! let finder = RouteFinder::with_config(stops, AlgorithmConfig::default().with_seed(42)).unwrap();
//!
//! let order = finder.shortest_route_order();
//! assert_eq!(order, vec![0, 2, 3, 1]);
//! assert_eq!(finder.shortest_route()[0].x, 0.0);
//! ```
//!
//! # Conventions
//!
//! Routes are open: the path length has no edge back to the start.
//! Solving is synchronous and happens at most once per [`RouteFinder`].

mod error;
mod geometry;
pub mod nn;
mod progress;
mod route;
pub mod sa;

pub use error::{Result, RouteError};
pub use geometry::{is_valid_route, Point, PointSet};
pub use nn::Direction;
pub use progress::{ChannelProgress, NoProgress, ProgressSink};
pub use route::{
    sort_by_shortest_route, sort_by_shortest_route_with, AlgorithmConfig, PointProperty,
    RouteAlgorithm, RouteFinder, RouteResult, SolveStats, DEFAULT_ALGORITHM,
};
pub use sa::DEFAULT_ANNEALING_STEPS;
