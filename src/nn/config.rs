//! NN configuration and direction preference.

use crate::geometry::Point;

/// Compass direction preference for nearest-neighbour search.
///
/// Directions are half-planes relative to the current point, in the
/// y-up drawing coordinate system: `East` admits candidates with
/// `dx >= 0`, `West` with `dx <= 0`, `North` with `dy >= 0` and `South`
/// with `dy <= 0`. Points on the dividing line belong to both sides.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    East,
    South,
    West,
    North,
    /// No preference.
    #[default]
    Any,
}

impl Direction {
    /// Whether `candidate` lies in this direction as seen from `from`.
    pub fn admits(self, from: Point, candidate: Point) -> bool {
        let dx = candidate.x - from.x;
        let dy = candidate.y - from.y;
        match self {
            Direction::East => dx >= 0.0,
            Direction::West => dx <= 0.0,
            Direction::North => dy >= 0.0,
            Direction::South => dy <= 0.0,
            Direction::Any => true,
        }
    }
}

/// Configuration for nearest-neighbour construction.
///
/// # Examples
///
/// ```
/// use u_routefinder::nn::{Direction, NnConfig};
///
/// let config = NnConfig::default().with_direction(Direction::East);
/// assert_eq!(config.direction, Direction::East);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NnConfig {
    /// Preferred direction of travel.
    ///
    /// A soft preference: when no unvisited point lies in this direction,
    /// the nearest unvisited point in any direction is taken instead.
    pub direction: Direction,
}

impl NnConfig {
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}
