//! SA configuration and cooling schedules.

use crate::error::{Result, RouteError};

/// Default number of outer (temperature) steps.
pub const DEFAULT_ANNEALING_STEPS: usize = 100;

/// Cooling schedule for temperature reduction between outer steps.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// Numerical Recipes uses `alpha = 0.9`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling: `T_k = T_0 * (steps - k) / steps`.
    ///
    /// Reaches zero only after the last step has run, so every step
    /// anneals at a positive temperature.
    Linear,
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.9 }
    }
}

/// How the working route is initialised before annealing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnealingStart {
    /// Input order `0, 1, ..., n-1`.
    #[default]
    Identity,
    /// The nearest-neighbour route (no direction preference).
    NearestNeighbour,
}

/// Configuration for route annealing.
///
/// Per outer step, up to `trials_per_point * n` moves are tried; the
/// step ends early once `successes_per_point * n` of them were accepted.
///
/// # Examples
///
/// ```
/// use u_routefinder::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_steps(200)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.95 })
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SaConfig {
    /// Number of outer (temperature) steps. Must be at least 1.
    pub steps: usize,

    /// Cooling schedule applied after each outer step.
    pub cooling: CoolingSchedule,

    /// Move attempts per step, per point.
    pub trials_per_point: usize,

    /// Accepted moves per step, per point, after which the step ends.
    pub successes_per_point: usize,

    /// Starting temperature.
    ///
    /// `None` derives it from the initial route: half its mean edge length.
    pub initial_temperature: Option<f64>,

    /// Initial route.
    pub start: AnnealingStart,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_ANNEALING_STEPS,
            cooling: CoolingSchedule::default(),
            trials_per_point: 100,
            successes_per_point: 10,
            initial_temperature: None,
            start: AnnealingStart::default(),
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_trials_per_point(mut self, n: usize) -> Self {
        self.trials_per_point = n;
        self
    }

    pub fn with_successes_per_point(mut self, n: usize) -> Self {
        self.successes_per_point = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = Some(t);
        self
    }

    pub fn with_start(mut self, start: AnnealingStart) -> Self {
        self.start = start;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidConfig`] describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(RouteError::invalid_config("annealing steps must be positive"));
        }
        if self.trials_per_point == 0 {
            return Err(RouteError::invalid_config("trials_per_point must be positive"));
        }
        if self.successes_per_point == 0 {
            return Err(RouteError::invalid_config(
                "successes_per_point must be positive",
            ));
        }
        if let Some(t) = self.initial_temperature {
            if !(t.is_finite() && t > 0.0) {
                return Err(RouteError::invalid_config(format!(
                    "initial_temperature must be positive and finite, got {t}"
                )));
            }
        }
        if let CoolingSchedule::Geometric { alpha } = self.cooling {
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(RouteError::invalid_config(format!(
                    "geometric alpha must be in (0, 1), got {alpha}"
                )));
            }
        }
        Ok(())
    }
}
