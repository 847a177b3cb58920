//! Named point properties on caller objects.

use std::collections::{BTreeMap, HashMap};

use crate::geometry::Point;

/// Capability of exposing point-valued properties by name.
///
/// Implemented by caller types that want to be ordered with
/// [`RouteFinder::from_objects`](super::RouteFinder::from_objects) or
/// [`sort_by_shortest_route`](super::sort_by_shortest_route).
///
/// # Examples
///
/// ```
/// use u_routefinder::{Point, PointProperty};
///
/// struct Stop {
///     location: Point,
///     label: &'static str,
/// }
///
/// impl PointProperty for Stop {
///     fn point_property(&self, key: &str) -> Option<Point> {
///         (key == "location").then_some(self.location)
///     }
/// }
///
/// let stop = Stop { location: Point::new(1.0, 2.0), label: "depot" };
/// assert_eq!(stop.point_property("location"), Some(Point::new(1.0, 2.0)));
/// assert_eq!(stop.point_property("label"), None);
/// ```
pub trait PointProperty {
    /// The point stored under `key`, or `None` if there is none.
    fn point_property(&self, key: &str) -> Option<Point>;
}

impl PointProperty for HashMap<String, Point> {
    fn point_property(&self, key: &str) -> Option<Point> {
        self.get(key).copied()
    }
}

impl PointProperty for BTreeMap<String, Point> {
    fn point_property(&self, key: &str) -> Option<Point> {
        self.get(key).copied()
    }
}

impl<T: PointProperty + ?Sized> PointProperty for &T {
    fn point_property(&self, key: &str) -> Option<Point> {
        (**self).point_property(key)
    }
}

impl<T: PointProperty + ?Sized> PointProperty for Box<T> {
    fn point_property(&self, key: &str) -> Option<Point> {
        (**self).point_property(key)
    }
}
