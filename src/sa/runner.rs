//! SA execution loop.

use super::config::{AnnealingStart, CoolingSchedule, SaConfig};
use super::moves::Move;
use crate::error::Result;
use crate::geometry::PointSet;
use crate::nn::{NnConfig, NnRunner};
use crate::progress::{fraction, ProgressSink};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Improvements smaller than this do not replace the best route.
const IMPROVEMENT_EPS: f64 = 1e-12;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best route found, starting at 0.
    pub best: Vec<usize>,

    /// Open path length of `best`, recomputed exactly.
    pub best_cost: f64,

    /// Total number of proposed moves.
    pub iterations: usize,

    /// Number of outer steps executed.
    pub steps: usize,

    /// Temperature at the first step.
    pub initial_temperature: f64,

    /// Temperature after the last step was cooled.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best cost at the start and after every outer step.
    pub cost_history: Vec<f64>,
}

/// Executes Simulated Annealing over a point set.
pub struct SaRunner;

impl SaRunner {
    /// Anneals a route over `points`.
    ///
    /// `progress` receives `k / steps` after each outer step `k`, ending
    /// with exactly `1.0`.
    ///
    /// # Errors
    ///
    /// [`crate::RouteError::InvalidConfig`] if `config` fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_routefinder::{NoProgress, PointSet};
    /// use u_routefinder::sa::{SaConfig, SaRunner};
    ///
    /// let points = PointSet::new(vec![(0.0, 0.0), (2.0, 0.0), (1.0, 0.0), (3.0, 0.0)]).unwrap();
    /// let config = SaConfig::default().with_steps(20).with_seed(42);
    /// let result = SaRunner::run(&points, &config, &mut NoProgress).unwrap();
    /// assert_eq!(result.best[0], 0);
    /// assert!(result.best_cost <= points.path_length(&[0, 1, 2, 3]));
    /// ```
    pub fn run(
        points: &PointSet,
        config: &SaConfig,
        progress: &mut dyn ProgressSink,
    ) -> Result<SaResult> {
        config.validate()?;
        Ok(anneal(points, config, progress))
    }
}

/// Runs the annealing loop on an already validated configuration.
pub(crate) fn anneal(
    points: &PointSet,
    config: &SaConfig,
    progress: &mut dyn ProgressSink,
) -> SaResult {
    let n = points.len();

    let mut current = match config.start {
        AnnealingStart::Identity => (0..n).collect::<Vec<_>>(),
        AnnealingStart::NearestNeighbour => NnRunner::run(points, &NnConfig::default()).order,
    };
    let mut current_cost = points.path_length(&current);

    // One or two points admit a single route.
    if n < 3 {
        progress.report(1.0);
        return SaResult {
            best: current,
            best_cost: current_cost,
            iterations: 0,
            steps: 0,
            initial_temperature: 0.0,
            final_temperature: 0.0,
            accepted_moves: 0,
            improving_moves: 0,
            cost_history: vec![current_cost],
        };
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let initial_temperature = config
        .initial_temperature
        .unwrap_or_else(|| derived_temperature(current_cost, n));
    let mut temperature = initial_temperature;

    let mut best = current.clone();
    let mut best_cost = current_cost;

    let trials = config.trials_per_point.saturating_mul(n);
    let success_limit = config.successes_per_point.saturating_mul(n);

    let mut total_iterations = 0usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;
    let mut cost_history = Vec::with_capacity(config.steps + 1);
    cost_history.push(best_cost);

    log::debug!(
        "annealing: n={n} steps={} t0={initial_temperature:.4} initial_length={current_cost:.3}",
        config.steps
    );

    for step in 0..config.steps {
        let mut successes = 0usize;

        for _ in 0..trials {
            let Some(mv) = Move::propose(n, &mut rng) else {
                break;
            };
            total_iterations += 1;

            let delta = mv.delta(&current, points);

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random::<f64>() < (-delta / temperature).exp()
            };

            if accept {
                mv.apply(&mut current);
                current_cost += delta;
                accepted_moves += 1;
                successes += 1;

                if current_cost < best_cost - IMPROVEMENT_EPS {
                    best.clone_from(&current);
                    best_cost = current_cost;
                }

                if successes >= success_limit {
                    break;
                }
            }
        }

        // Resync to keep incremental drift out of the running cost.
        current_cost = points.path_length(&current);

        temperature = cool(temperature, initial_temperature, config, step);
        cost_history.push(best_cost);

        log::trace!(
            "annealing step {}/{}: t={temperature:.5} current={current_cost:.3} best={best_cost:.3} accepted={successes}",
            step + 1,
            config.steps
        );
        progress.report(fraction(step + 1, config.steps));
    }

    let best_cost = points.path_length(&best);
    log::debug!(
        "annealing done: n={n} length={best_cost:.3} iterations={total_iterations} accepted={accepted_moves} improving={improving_moves}"
    );

    SaResult {
        best,
        best_cost,
        iterations: total_iterations,
        steps: config.steps,
        initial_temperature,
        final_temperature: temperature,
        accepted_moves,
        improving_moves,
        cost_history,
    }
}

/// Half the mean edge length of the starting route, or 1.0 when all
/// points coincide.
fn derived_temperature(length: f64, n: usize) -> f64 {
    let t = 0.5 * length / (n - 1) as f64;
    if t.is_finite() && t > 0.0 {
        t
    } else {
        1.0
    }
}

/// Apply the cooling schedule after outer step `step` (0-based).
fn cool(temperature: f64, initial: f64, config: &SaConfig, step: usize) -> f64 {
    match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,
        CoolingSchedule::Linear => {
            let remaining = config.steps.saturating_sub(step + 1);
            initial * remaining as f64 / config.steps as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::is_valid_route;
    use crate::progress::NoProgress;
    use crate::RouteError;

    fn set(points: &[(f64, f64)]) -> PointSet {
        PointSet::new(points.iter().copied()).unwrap()
    }

    fn circle(n: usize) -> PointSet {
        // Input order shuffled around the circle so identity start is poor.
        let pts: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let k = (i * 7) % n;
                let angle = k as f64 / n as f64 * std::f64::consts::TAU;
                (100.0 * angle.cos(), 100.0 * angle.sin())
            })
            .collect();
        set(&pts)
    }

    #[test]
    fn test_invalid_config_rejected() {
        let points = set(&[(0.0, 0.0), (1.0, 1.0)]);
        let err = SaRunner::run(&points, &SaConfig::default().with_steps(0), &mut NoProgress)
            .unwrap_err();
        assert!(matches!(err, RouteError::InvalidConfig(_)));
    }

    #[test]
    fn test_single_point_short_circuits() {
        let points = set(&[(4.0, 4.0)]);
        let mut reports = Vec::new();
        let result =
            SaRunner::run(&points, &SaConfig::default(), &mut |v: f64| reports.push(v)).unwrap();
        assert_eq!(result.best, vec![0]);
        assert_eq!(result.best_cost, 0.0);
        assert_eq!(result.iterations, 0);
        assert_eq!(reports, vec![1.0]);
    }

    #[test]
    fn test_two_points() {
        let points = set(&[(0.0, 0.0), (6.0, 8.0)]);
        let result = SaRunner::run(&points, &SaConfig::default(), &mut NoProgress).unwrap();
        assert_eq!(result.best, vec![0, 1]);
        assert!((result.best_cost - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_three_points_finds_optimum() {
        let points = set(&[(0.0, 0.0), (10.0, 0.0), (1.0, 0.0)]);
        let config = SaConfig::default().with_steps(20).with_seed(3);
        let result = SaRunner::run(&points, &config, &mut NoProgress).unwrap();
        assert_eq!(result.best, vec![0, 2, 1]);
        assert!((result.best_cost - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_circle_improves_on_start() {
        let points = circle(30);
        let start_cost = points.path_length(&(0..30).collect::<Vec<_>>());
        let config = SaConfig::default().with_seed(42);
        let result = SaRunner::run(&points, &config, &mut NoProgress).unwrap();

        assert!(is_valid_route(&result.best, 30));
        assert!((result.best_cost - points.path_length(&result.best)).abs() < 1e-9);
        assert!(
            result.best_cost < 0.5 * start_cost,
            "expected large improvement: {} vs {start_cost}",
            result.best_cost
        );
        // Open path around a circle of radius 100: a bit under 2πr.
        let perimeter = std::f64::consts::TAU * 100.0;
        assert!(
            result.best_cost < 1.3 * perimeter,
            "expected near-circular route, got {}",
            result.best_cost
        );
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves >= result.improving_moves);
    }

    #[test]
    fn test_never_worse_than_start() {
        let points = circle(15);
        let config = SaConfig::default()
            .with_steps(5)
            .with_start(AnnealingStart::NearestNeighbour)
            .with_seed(1);
        let nn = NnRunner::run(&points, &NnConfig::default());
        let result = SaRunner::run(&points, &config, &mut NoProgress).unwrap();
        assert!(result.best_cost <= nn.length + 1e-9);
    }

    #[test]
    fn test_same_seed_same_route() {
        let points = circle(20);
        let config = SaConfig::default().with_steps(30).with_seed(99);
        let a = SaRunner::run(&points, &config, &mut NoProgress).unwrap();
        let b = SaRunner::run(&points, &config, &mut NoProgress).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn test_progress_monotonic_and_complete() {
        let points = circle(12);
        let config = SaConfig::default().with_steps(25).with_seed(7);
        let mut reports = Vec::new();
        SaRunner::run(&points, &config, &mut |v: f64| reports.push(v)).unwrap();

        assert_eq!(reports.len(), 25);
        for window in reports.windows(2) {
            assert!(window[1] >= window[0]);
        }
        assert!(reports.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert_eq!(reports.last().copied(), Some(1.0));
    }

    #[test]
    fn test_cost_history_non_increasing() {
        let points = circle(25);
        let config = SaConfig::default().with_steps(40).with_seed(5);
        let result = SaRunner::run(&points, &config, &mut NoProgress).unwrap();

        assert_eq!(result.cost_history.len(), 41);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0] + 1e-10,
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_geometric_cooling() {
        let points = circle(10);
        let config = SaConfig::default()
            .with_steps(10)
            .with_initial_temperature(2.0)
            .with_seed(1);
        let result = SaRunner::run(&points, &config, &mut NoProgress).unwrap();
        assert!((result.initial_temperature - 2.0).abs() < 1e-12);
        assert!((result.final_temperature - 2.0 * 0.9f64.powi(10)).abs() < 1e-12);
    }

    #[test]
    fn test_linear_cooling_positive_until_last_step() {
        let config = SaConfig::default()
            .with_steps(4)
            .with_cooling(CoolingSchedule::Linear);
        assert!((cool(8.0, 8.0, &config, 0) - 6.0).abs() < 1e-12);
        assert!((cool(6.0, 8.0, &config, 2) - 2.0).abs() < 1e-12);
        assert_eq!(cool(2.0, 8.0, &config, 3), 0.0);
    }

    #[test]
    fn test_derived_temperature() {
        assert!((derived_temperature(30.0, 4) - 5.0).abs() < 1e-12);
        assert_eq!(derived_temperature(0.0, 4), 1.0);
    }

    #[test]
    fn test_coincident_points() {
        let points = set(&[(1.0, 1.0); 6]);
        let config = SaConfig::default().with_steps(3).with_seed(2);
        let result = SaRunner::run(&points, &config, &mut NoProgress).unwrap();
        assert!(is_valid_route(&result.best, 6));
        assert_eq!(result.best_cost, 0.0);
    }

    #[test]
    fn test_overflowing_distances_keep_every_point() {
        let points = set(&[(-1e308, 0.0), (1e308, 0.0), (1e308, 1.0), (0.0, 1e308)]);
        for start in [AnnealingStart::Identity, AnnealingStart::NearestNeighbour] {
            let config = SaConfig::default()
                .with_steps(5)
                .with_start(start)
                .with_seed(11);
            let result = SaRunner::run(&points, &config, &mut NoProgress).unwrap();
            assert!(
                is_valid_route(&result.best, 4),
                "{start:?} produced {:?}",
                result.best
            );
        }
    }

    #[test]
    fn test_high_temperature_accepts_uphill() {
        let points = circle(10);
        let config = SaConfig::default()
            .with_steps(1)
            .with_initial_temperature(1e9)
            .with_trials_per_point(50)
            .with_successes_per_point(1000)
            .with_seed(42);
        let result = SaRunner::run(&points, &config, &mut NoProgress).unwrap();
        let ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(ratio > 0.95, "expected near-total acceptance, got {ratio}");
    }
}
