//! The [`RouteFinder`] facade.

use std::cell::OnceCell;

use super::config::{AlgorithmConfig, RouteAlgorithm};
use super::property::PointProperty;
use super::result::{RouteResult, SolveStats};
use crate::error::{Result, RouteError};
use crate::geometry::{Point, PointSet};
use crate::nn::NnRunner;
use crate::progress::{NoProgress, ProgressSink};
use crate::sa;

/// Finds a short open route through a fixed set of points.
///
/// The route always starts at the first input point. It is computed
/// lazily by the first query and cached; every later query reads the
/// cache, so each finder runs its solver at most once.
///
/// # Examples
///
/// ```
/// use u_routefinder::{AlgorithmConfig, Point, RouteFinder};
///
/// let points = vec![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
/// let finder = RouteFinder::with_config(points, AlgorithmConfig::default().with_seed(1)).unwrap();
///
/// let route = finder.shortest_route();
/// assert_eq!(route[0], Point::new(0.0, 0.0));
/// assert!((finder.path_length().unwrap() - 30.0).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct RouteFinder {
    points: PointSet,
    config: AlgorithmConfig,
    result: OnceCell<RouteResult>,
}

impl RouteFinder {
    /// Creates a finder with the default configuration.
    ///
    /// # Errors
    ///
    /// [`RouteError::EmptyInput`] or [`RouteError::NonFinitePoint`].
    pub fn new<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self::with_config(points, AlgorithmConfig::default())
    }

    /// Creates a finder using `algorithm` with default settings.
    pub fn with_algorithm<I, P>(points: I, algorithm: RouteAlgorithm) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self::with_config(points, AlgorithmConfig::new(algorithm))
    }

    /// Creates a finder with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Point validation errors as for [`PointSet::new`], or
    /// [`RouteError::InvalidConfig`].
    pub fn with_config<I, P>(points: I, config: AlgorithmConfig) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self::from_point_set(PointSet::new(points)?, config)
    }

    pub fn from_point_set(points: PointSet, config: AlgorithmConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            points,
            config,
            result: OnceCell::new(),
        })
    }

    /// Creates a finder over the point property `key` of each object.
    ///
    /// # Errors
    ///
    /// [`RouteError::MissingProperty`] for the first object without the
    /// property, plus the errors of [`RouteFinder::with_config`].
    pub fn from_objects<T: PointProperty>(
        objects: &[T],
        key: &str,
        config: AlgorithmConfig,
    ) -> Result<Self> {
        let points = extract_points(objects, |o| o.point_property(key)).map_err(|index| {
            RouteError::MissingProperty {
                index,
                key: key.to_string(),
            }
        })?;
        Self::with_config(points, config)
    }

    /// Creates a finder over the points `accessor` yields for each object.
    ///
    /// # Errors
    ///
    /// [`RouteError::MissingPoint`] for the first object the accessor
    /// returns `None` for, plus the errors of [`RouteFinder::with_config`].
    pub fn from_objects_with<T, F>(objects: &[T], config: AlgorithmConfig, accessor: F) -> Result<Self>
    where
        F: Fn(&T) -> Option<Point>,
    {
        let points =
            extract_points(objects, accessor).map_err(|index| RouteError::MissingPoint { index })?;
        Self::with_config(points, config)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a finder holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn config(&self) -> &AlgorithmConfig {
        &self.config
    }

    pub fn algorithm(&self) -> RouteAlgorithm {
        self.config.algorithm
    }

    /// Whether the route has been computed.
    pub fn is_solved(&self) -> bool {
        self.result.get().is_some()
    }

    /// The cached result, if the route has been computed.
    pub fn result(&self) -> Option<&RouteResult> {
        self.result.get()
    }

    /// The cached result, or a not-done placeholder.
    pub fn snapshot(&self) -> RouteResult {
        self.result
            .get()
            .cloned()
            .unwrap_or_else(|| RouteResult::pending(self.len(), self.algorithm()))
    }

    /// Computes the route if needed and returns it.
    pub fn solve(&self) -> &RouteResult {
        self.solve_with_progress(&mut NoProgress)
    }

    /// Computes the route if needed, reporting progress to `progress`.
    ///
    /// `progress` is only called when this call actually runs the solver;
    /// a cached route is returned without any report.
    ///
    /// # Panics
    ///
    /// If `progress` queries this same finder while it is solving. Any
    /// query from inside the sink re-enters the unfinished solve.
    pub fn solve_with_progress(&self, progress: &mut dyn ProgressSink) -> &RouteResult {
        self.result.get_or_init(|| self.compute(progress))
    }

    /// The input points in route order.
    pub fn shortest_route(&self) -> Vec<Point> {
        self.points.reorder(self.solve().order())
    }

    /// As [`RouteFinder::shortest_route`], reporting progress if it solves.
    pub fn shortest_route_with_progress(&self, progress: &mut dyn ProgressSink) -> Vec<Point> {
        self.points
            .reorder(self.solve_with_progress(progress).order())
    }

    /// Route order as 0-based input indices, starting with 0.
    pub fn shortest_route_order(&self) -> Vec<usize> {
        self.solve().order().to_vec()
    }

    /// Route order as 1-based input positions, starting with 1.
    pub fn shortest_route_order_one_based(&self) -> Vec<usize> {
        self.solve().order_one_based()
    }

    /// Open path length of the computed route.
    ///
    /// `None` until the route has been computed; this accessor never
    /// triggers a solve.
    pub fn path_length(&self) -> Option<f64> {
        self.result.get().map(RouteResult::path_length)
    }

    /// Copies `items` into route order. `items[i]` belongs to point `i`.
    ///
    /// # Errors
    ///
    /// [`RouteError::LengthMismatch`] unless `items.len() == self.len()`.
    pub fn sorted_from_slice<T: Clone>(&self, items: &[T]) -> Result<Vec<T>> {
        self.check_len(items.len())?;
        Ok(self
            .solve()
            .order()
            .iter()
            .map(|&i| items[i].clone())
            .collect())
    }

    /// Moves `items` into route order. `items[i]` belongs to point `i`.
    ///
    /// # Errors
    ///
    /// [`RouteError::LengthMismatch`] unless `items.len() == self.len()`.
    pub fn sort_vec<T>(&self, items: Vec<T>) -> Result<Vec<T>> {
        self.check_len(items.len())?;
        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        Ok(self
            .solve()
            .order()
            .iter()
            .filter_map(|&i| slots[i].take())
            .collect())
    }

    fn check_len(&self, actual: usize) -> Result<()> {
        if actual != self.len() {
            return Err(RouteError::LengthMismatch {
                expected: self.len(),
                actual,
            });
        }
        Ok(())
    }

    fn compute(&self, progress: &mut dyn ProgressSink) -> RouteResult {
        let algorithm = self.config.algorithm;
        log::debug!(
            "route finder: solving n={} with {}",
            self.len(),
            algorithm.as_str()
        );

        match algorithm {
            RouteAlgorithm::SimulatedAnnealing => {
                let result = sa::anneal(&self.points, &self.config.annealing, progress);
                let stats = SolveStats {
                    iterations: result.iterations,
                    accepted_moves: result.accepted_moves,
                    improving_moves: result.improving_moves,
                    final_temperature: Some(result.final_temperature),
                    direction_fallbacks: 0,
                };
                RouteResult::completed(result.best, result.best_cost, algorithm, stats)
            }
            RouteAlgorithm::NearestNeighbour => {
                let result = NnRunner::run(&self.points, &self.config.nearest);
                progress.report(1.0);
                let stats = SolveStats {
                    direction_fallbacks: result.direction_fallbacks,
                    ..SolveStats::default()
                };
                RouteResult::completed(result.order, result.length, algorithm, stats)
            }
        }
    }
}

/// Sorts `objects` along a short route through their `key` points.
///
/// # Errors
///
/// As for [`RouteFinder::from_objects`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use u_routefinder::{sort_by_shortest_route, AlgorithmConfig, Point};
///
/// let objects: Vec<HashMap<String, Point>> = [(0.0, 0.0), (9.0, 0.0), (1.0, 0.0)]
///     .into_iter()
///     .map(|(x, y)| HashMap::from([("at".to_string(), Point::new(x, y))]))
///     .collect();
///
/// let sorted = sort_by_shortest_route(objects, "at", AlgorithmConfig::nearest_neighbour()).unwrap();
/// assert_eq!(sorted[1]["at"], Point::new(1.0, 0.0));
/// ```
pub fn sort_by_shortest_route<T: PointProperty>(
    objects: Vec<T>,
    key: &str,
    config: AlgorithmConfig,
) -> Result<Vec<T>> {
    let finder = RouteFinder::from_objects(&objects, key, config)?;
    finder.sort_vec(objects)
}

/// Sorts `objects` along a short route through the points `accessor`
/// yields for them.
///
/// # Errors
///
/// As for [`RouteFinder::from_objects_with`].
pub fn sort_by_shortest_route_with<T, F>(
    objects: Vec<T>,
    config: AlgorithmConfig,
    accessor: F,
) -> Result<Vec<T>>
where
    F: Fn(&T) -> Option<Point>,
{
    let finder = RouteFinder::from_objects_with(&objects, config, accessor)?;
    finder.sort_vec(objects)
}

/// Collects one point per object, or the index of the first object
/// without one.
fn extract_points<T, F>(objects: &[T], accessor: F) -> std::result::Result<Vec<Point>, usize>
where
    F: Fn(&T) -> Option<Point>,
{
    objects
        .iter()
        .enumerate()
        .map(|(i, o)| accessor(o).ok_or(i))
        .collect()
}
