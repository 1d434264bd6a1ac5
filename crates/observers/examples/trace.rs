//! Traces a shooting search on a saturation pressure correlation.
//!
//! Finds the condensing temperature (in K) at which a simplified R134a
//! saturation pressure correlation reaches 1200 kPa, printing one line per
//! iteration:
//!
//! ```sh
//! cargo run --example trace
//! ```

use std::convert::Infallible;
use std::io;

use glide_core::Model;
use glide_observers::IterationTrace;
use glide_solvers::target::{ScalarTarget, shooting};

/// Antoine-style saturation pressure correlation for R134a, kPa from K.
struct SaturationPressure;

impl Model for SaturationPressure {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, temperature: &f64) -> Result<f64, Self::Error> {
        Ok((14.41 - 2094.0 / (temperature - 33.06)).exp())
    }
}

fn main() {
    let config = shooting::Config {
        tolerance: 0.1,
        initial_step: 5.0,
        min: Some(250.0),
        max: Some(370.0),
        ..shooting::Config::new(300.0, 1200.0)
    };

    let solution = shooting::solve(
        &SaturationPressure,
        &ScalarTarget,
        &config,
        IterationTrace::new(io::stdout()),
    )
    .expect("correlation is defined across the whole search range");

    println!("{solution}");
}
