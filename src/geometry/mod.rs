//! Plane geometry: points and the immutable point set solvers work on.

mod point;
mod point_set;

pub use point::Point;
pub use point_set::{is_valid_route, PointSet};
