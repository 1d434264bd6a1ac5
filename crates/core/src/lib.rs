//! Core traits and types for the Glide cycle-analysis toolkit.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`TargetProblem`] — adapts one free solver variable to a model input and
//!   reads a scalar observed value back from the output

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::TargetProblem;
pub use {model::Model, model::Snapshot};
