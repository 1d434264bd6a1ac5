//! Adaptive step-halving search for target-value problems.
//!
//! # Algorithm
//!
//! The shooting solver varies one free variable by a fixed step, always in
//! the direction that moves the observed value toward the target. Each time
//! the required direction reverses, the step is divided by the configured
//! scaler before the move is applied, so the search behaves like a damped
//! bisection around the crossing rather than a fixed-step walk. The step
//! shrinks only across reversals, never between two moves in the same
//! direction.
//!
//! When the response trend is not supplied, the solver probes it with one
//! extra evaluation: it compares the observed values at the start point and
//! one initial step away. A flat probe cannot distinguish the two trends; the
//! solver then assumes an increasing trend, flags the assumption in the
//! solution, and emits [`Event::AmbiguousTrend`].
//!
//! # When to Use
//!
//! The shooting solver is appropriate when:
//! - The observed value responds monotonically to the free variable near the
//!   target crossing
//! - No bracket around the crossing is known, only a starting point
//! - Evaluations may fail off to one side (for example, outside a fluid's
//!   phase envelope), so bound clamps are needed to keep the search inside a
//!   valid region
//!
//! # Limitations
//!
//! - **Single variable only**: works with [`TargetProblem`], which is scalar
//! - **Monotonic assumption**: a non-monotonic response can trap the search
//!   on the wrong branch
//! - **No impossibility detection**: clamping silently corrects overshoot,
//!   so a crossing outside `[min, max]` surfaces as iteration exhaustion,
//!   not as a distinct error
//! - **Unbounded without a limit**: with `max_iters` unset the loop runs
//!   until tolerance is met; the caller is responsible for making that
//!   reachable
//!
//! # Observer Events
//!
//! - [`Event::TrendProbed`] — the probe resolved the trend
//! - [`Event::AmbiguousTrend`] — flat probe; increasing trend assumed
//! - [`Event::Evaluated`] — one event per evaluation in the main loop
//!
//! Observers can return [`Action::StopEarly`] to halt the search and keep
//! the most recent evaluation as the solution.
//!
//! [`TargetProblem`]: glide_core::TargetProblem

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;
mod state;
mod trend;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use trend::Trend;

use glide_core::{Model, Observer, TargetProblem};

/// Drives the observed value to the configured target by shooting.
///
/// The observer receives an [`Event`] for the trend probe and for each
/// evaluation in the main loop. See the [module docs](self) for the step
/// adaptation rules and observer actions.
///
/// # Errors
///
/// Returns an error if the config is invalid, if the model or problem fails
/// during an evaluation, or if an evaluation produces a non-finite observed
/// value.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: TargetProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    search::search(model, problem, config, observer)
}

/// Runs the shooting search without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the config is invalid, if the model or problem fails
/// during an evaluation, or if an evaluation produces a non-finite observed
/// value.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: TargetProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, config, ())
}
