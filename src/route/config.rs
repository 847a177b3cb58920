//! Algorithm selection.

use crate::error::Result;
use crate::nn::{Direction, NnConfig};
use crate::sa::SaConfig;

/// Heuristic used to compute a route.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteAlgorithm {
    /// Simulated annealing refinement.
    SimulatedAnnealing,
    /// Greedy nearest-neighbour construction.
    NearestNeighbour,
}

/// The algorithm used when none is chosen explicitly.
pub const DEFAULT_ALGORITHM: RouteAlgorithm = RouteAlgorithm::SimulatedAnnealing;

impl Default for RouteAlgorithm {
    fn default() -> Self {
        DEFAULT_ALGORITHM
    }
}

impl RouteAlgorithm {
    /// Name used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SimulatedAnnealing => "simulated-annealing",
            Self::NearestNeighbour => "nearest-neighbour",
        }
    }
}

/// Configuration for a [`RouteFinder`](super::RouteFinder).
///
/// Holds the selected algorithm plus the settings of both heuristics;
/// only the selected one's settings are used.
///
/// # Examples
///
/// ```
/// use u_routefinder::{AlgorithmConfig, Direction, RouteAlgorithm};
///
/// let config = AlgorithmConfig::nearest_neighbour().with_direction(Direction::North);
/// assert_eq!(config.algorithm, RouteAlgorithm::NearestNeighbour);
///
/// let config = AlgorithmConfig::default().with_annealing_steps(250).with_seed(1);
/// assert_eq!(config.annealing.steps, 250);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlgorithmConfig {
    pub algorithm: RouteAlgorithm,
    pub annealing: SaConfig,
    pub nearest: NnConfig,
}

impl AlgorithmConfig {
    pub fn new(algorithm: RouteAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn simulated_annealing() -> Self {
        Self::new(RouteAlgorithm::SimulatedAnnealing)
    }

    pub fn nearest_neighbour() -> Self {
        Self::new(RouteAlgorithm::NearestNeighbour)
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_annealing(mut self, annealing: SaConfig) -> Self {
        self.annealing = annealing;
        self
    }

    /// Sets the number of outer annealing steps.
    pub fn with_annealing_steps(mut self, steps: usize) -> Self {
        self.annealing.steps = steps;
        self
    }

    /// Sets the annealing random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.annealing.seed = Some(seed);
        self
    }

    /// Sets the nearest-neighbour direction preference.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.nearest.direction = direction;
        self
    }

    /// Validates the configuration.
    ///
    /// Annealing settings are checked even when nearest neighbour is
    /// selected, so a config stays valid if the algorithm is switched.
    pub fn validate(&self) -> Result<()> {
        self.annealing.validate()
    }
}
