//! Reusable observers for the Glide cycle-analysis toolkit.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work across solvers in the Glide ecosystem.
//!
//! # Modules
//!
//! - [`traits`] — capability traits for cross-solver observers
//!   ([`HasDeviation`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`IterationTrace`] — writes one line per solver event to any
//!   [`io::Write`] sink, for debugging a search without touching its
//!   control flow
//!
//! [`Observer`]: glide_core::Observer
//! [`HasDeviation`]: traits::HasDeviation
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`io::Write`]: std::io::Write

pub mod traits;

mod trace;

pub use trace::IterationTrace;
