//! Solvers for target-value problems — driving an observed output to a
//! caller-supplied target.
//!
//! A [`TargetProblem`] maps the solver's free variable to a model input,
//! calls the model, and reads a scalar observed value back. Solvers in this
//! module vary the free variable until the observed value is within tolerance
//! of the target.
//!
//! # Problem adapters
//!
//! - [`ScalarTarget`] — for models that already map `f64` to `f64`
//! - [`MappingTarget`] — for models that exchange named values through
//!   key/value mappings
//!
//! # Solvers
//!
//! - [`shooting`] — adaptive step-halving search for monotonic responses
//!
//! [`TargetProblem`]: glide_core::TargetProblem

mod evaluate;
mod mapping;
mod scalar;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use mapping::{MappingError, MappingTarget};
pub use scalar::ScalarTarget;

pub mod shooting;
