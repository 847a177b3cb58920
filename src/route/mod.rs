//! Route facade: algorithm selection, memoized results and reordering of
//! caller data.

mod config;
mod finder;
mod property;
mod result;

pub use config::{AlgorithmConfig, RouteAlgorithm, DEFAULT_ALGORITHM};
pub use finder::{sort_by_shortest_route, sort_by_shortest_route_with, RouteFinder};
pub use property::PointProperty;
pub use result::{RouteResult, SolveStats};
