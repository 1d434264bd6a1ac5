use std::fmt;

use glide_core::Snapshot;

use crate::target::Evaluation;

use super::Trend;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The observed value is within tolerance of the target.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a shooting solve.
///
/// Non-converged outcomes still carry the last evaluation, so callers can
/// inspect how far the search got before deciding whether exhaustion is
/// fatal for them.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Final value of the free variable.
    pub x: f64,

    /// Observed value at the final `x`.
    pub y: f64,

    /// The target the search was driving toward.
    pub target: f64,

    /// Corrective iterations performed when the solver finished.
    pub iters: usize,

    /// The trend the search used, supplied or probed.
    pub trend: Trend,

    /// True when a flat probe forced the increasing-trend fallback.
    pub trend_assumed: bool,

    /// Snapshot of the final model call.
    pub snapshot: Snapshot<I, O>,
}

impl<I, O> Solution<I, O> {
    /// Constructs a solution from the final evaluation.
    pub(super) fn from_eval(
        eval: Evaluation<I, O>,
        status: Status,
        iters: usize,
        trend: Trend,
        trend_assumed: bool,
        target: f64,
    ) -> Self {
        Self {
            status,
            x: eval.x,
            y: eval.y,
            target,
            iters,
            trend,
            trend_assumed,
            snapshot: eval.snapshot,
        }
    }

    /// Deviation of the final observed value from the target.
    #[must_use]
    pub fn deviation(&self) -> f64 {
        self.y - self.target
    }

    /// Returns true when the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

impl<I, O> fmt::Display for Solution<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headline = match self.status {
            Status::Converged => "convergence reached",
            Status::MaxIters => "convergence not reached",
            Status::StoppedByObserver => "stopped by observer",
        };
        write!(
            f,
            "{headline}: iterations: {}, error: {:.4}, x = {:.4}, y = {:.4}, target = {:.4}",
            self.iters,
            self.deviation().abs(),
            self.x,
            self.y,
            self.target,
        )
    }
}
