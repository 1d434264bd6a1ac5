//! Numerical solvers for the Glide cycle-analysis toolkit.
//!
//! Solvers operate on [`Model`]s through problem traits defined in
//! `glide-core`, so the same cycle model can be reused across solvers and
//! instrumented with observers without modification.
//!
//! [`Model`]: glide_core::Model

pub mod target;
