use thiserror::Error;

use super::Trend;

/// Configuration for the shooting solver.
///
/// All fields are public; [`Config::new`] fills in default search tuning and
/// struct-update syntax overrides the rest:
///
/// ```
/// use glide_solvers::target::shooting::Config;
///
/// let config = Config {
///     tolerance: 0.01,
///     max_iters: Some(50),
///     ..Config::new(310.0, 1200.0)
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Initial value of the free variable.
    pub start: f64,

    /// Value the search drives the observed output toward.
    pub target: f64,

    /// Convergence tolerance on `|y - target|`. Must be finite and positive.
    pub tolerance: f64,

    /// Initial step applied to the free variable. Must be finite and nonzero.
    ///
    /// The search uses the step's magnitude; its sign only chooses which side
    /// of the start point the trend probe evaluates.
    pub initial_step: f64,

    /// Factor dividing the step on every direction reversal.
    ///
    /// Must be finite and greater than one, so the step strictly shrinks
    /// across reversals and the search tightens around the crossing.
    pub step_scaler: f64,

    /// Known response trend. `None` probes the trend automatically at the
    /// cost of one extra evaluation before the main loop.
    pub trend: Option<Trend>,

    /// Lower clamp for the free variable, applied after every move.
    pub min: Option<f64>,

    /// Upper clamp for the free variable, applied after every move.
    pub max: Option<f64>,

    /// Limit on corrective iterations. Exhausting it yields a non-converged
    /// solution rather than an error.
    ///
    /// `None` leaves the loop unbounded: it runs until the tolerance is met,
    /// and it is the caller's responsibility to guarantee that the response
    /// is monotonic enough for the target to be reachable.
    pub max_iters: Option<usize>,
}

/// Errors that can occur when validating a shooting solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("start must be finite")]
    Start,

    #[error("target must be finite")]
    Target,

    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("initial_step must be finite and nonzero")]
    InitialStep,

    #[error("step_scaler must be finite and greater than one")]
    StepScaler,

    #[error("bounds must be finite with min not exceeding max")]
    Bounds,
}

impl Config {
    /// Creates a config for the given start point and target with default
    /// search tuning: tolerance `1e-6`, initial step `1.0`, step scaler `2`,
    /// probed trend, no bounds, and a limit of 100 iterations.
    #[must_use]
    pub fn new(start: f64, target: f64) -> Self {
        Self {
            start,
            target,
            tolerance: 1e-6,
            initial_step: 1.0,
            step_scaler: 2.0,
            trend: None,
            min: None,
            max: None,
            max_iters: Some(100),
        }
    }

    /// Validates the configuration.
    ///
    /// Solvers call this before any model evaluation, so a bad config fails
    /// fast.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start.is_finite() {
            return Err(ConfigError::Start);
        }
        if !self.target.is_finite() {
            return Err(ConfigError::Target);
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if !self.initial_step.is_finite() || self.initial_step == 0.0 {
            return Err(ConfigError::InitialStep);
        }
        if !self.step_scaler.is_finite() || self.step_scaler <= 1.0 {
            return Err(ConfigError::StepScaler);
        }
        if self.min.is_some_and(|min| !min.is_finite())
            || self.max.is_some_and(|max| !max.is_finite())
        {
            return Err(ConfigError::Bounds);
        }
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min > max
        {
            return Err(ConfigError::Bounds);
        }
        Ok(())
    }

    /// Clamps the free variable into the configured bounds.
    pub(super) fn clamp(&self, x: f64) -> f64 {
        let x = match self.min {
            Some(min) if x < min => min,
            _ => x,
        };
        match self.max {
            Some(max) if x > max => max,
            _ => x,
        }
    }
}
