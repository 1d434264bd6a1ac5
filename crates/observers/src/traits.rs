//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types,
//! enabling observers to work generically across solvers.
//!
//! # Example
//!
//! ```rust
//! use glide_core::Observer;
//! use glide_observers::traits::{CanStopEarly, HasDeviation};
//!
//! /// Stops as soon as the deviation drops inside a looser band.
//! struct GoodEnough {
//!     band: f64,
//! }
//!
//! impl<E: HasDeviation, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.deviation().abs() <= self.band).then(A::stop_early)
//!     }
//! }
//! ```

use glide_solvers::target::shooting;

/// An event that carries a deviation from a target value.
pub trait HasDeviation {
    /// Returns the deviation for this event.
    ///
    /// Returns `f64::NAN` when the event does not correspond to a search
    /// iteration.
    fn deviation(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<I, O> HasDeviation for shooting::Event<'_, I, O> {
    fn deviation(&self) -> f64 {
        match self {
            shooting::Event::Evaluated { deviation, .. } => *deviation,
            shooting::Event::TrendProbed { .. } | shooting::Event::AmbiguousTrend { .. } => {
                f64::NAN
            }
        }
    }
}

impl CanStopEarly for shooting::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
