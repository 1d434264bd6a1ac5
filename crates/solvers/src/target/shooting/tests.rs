use super::*;

use std::cell::Cell;
use std::collections::HashMap;
use std::convert::Infallible;

use approx::assert_relative_eq;
use glide_core::Model;
use thiserror::Error;

use crate::target::{MappingTarget, ScalarTarget};

/// Model computing `2x + 1`.
struct LinearModel;

impl Model for LinearModel {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(2.0 * x + 1.0)
    }
}

/// Model computing `10 - 3x`.
struct FallingModel;

impl Model for FallingModel {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(10.0 - 3.0 * x)
    }
}

/// Model that always returns 5.
struct FlatModel;

impl Model for FlatModel {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, _x: &f64) -> Result<f64, Self::Error> {
        Ok(5.0)
    }
}

/// Model computing `2x + 1` while counting its calls.
struct CountingModel {
    calls: Cell<usize>,
}

impl CountingModel {
    fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }
}

impl Model for CountingModel {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        Ok(2.0 * x + 1.0)
    }
}

#[derive(Debug, Error)]
#[error("phase envelope exceeded above x = {threshold}")]
struct EnvelopeError {
    threshold: f64,
}

/// Model that fails above a threshold, like a property lookup leaving its
/// valid region.
struct FailsAbove {
    threshold: f64,
}

impl Model for FailsAbove {
    type Input = f64;
    type Output = f64;
    type Error = EnvelopeError;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x > self.threshold {
            Err(EnvelopeError {
                threshold: self.threshold,
            })
        } else {
            Ok(2.0 * x + 1.0)
        }
    }
}

/// Mapping model computing `capacity = 2 * flow + 1` plus a side artifact.
struct MapLinearModel;

impl Model for MapLinearModel {
    type Input = HashMap<String, f64>;
    type Output = HashMap<String, f64>;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let flow = input.get("flow").copied().unwrap_or(0.0);
        let mut output = input.clone();
        output.insert("capacity".into(), 2.0 * flow + 1.0);
        output.insert("power".into(), 0.4 * flow);
        Ok(output)
    }
}

/// The classic scenario: `f(x) = 2x + 1`, target 10, unit step, scaler 2.
fn linear_config() -> Config {
    Config {
        tolerance: 0.01,
        initial_step: 1.0,
        step_scaler: 2.0,
        ..Config::new(0.0, 10.0)
    }
}

#[test]
fn converges_on_an_increasing_response() {
    let solution = solve_unobserved(&LinearModel, &ScalarTarget, &linear_config())
        .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 4.5, epsilon = 1e-10);
    assert_relative_eq!(solution.y, 10.0, epsilon = 1e-10);
    assert_eq!(solution.trend, Trend::Increasing);
    assert!(!solution.trend_assumed);
    assert_eq!(solution.iters, 6);
}

#[test]
fn converges_on_a_decreasing_response() {
    let config = Config {
        tolerance: 0.01,
        ..Config::new(0.0, 1.0)
    };

    let solution =
        solve_unobserved(&FallingModel, &ScalarTarget, &config).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-10);
    assert_eq!(solution.trend, Trend::Decreasing);
}

#[test]
fn supplied_trend_skips_the_probe() {
    let model = CountingModel::new();
    let config = Config {
        trend: Some(Trend::Increasing),
        ..linear_config()
    };

    let solution = solve_unobserved(&model, &ScalarTarget, &config).expect("should solve");

    // One call per loop evaluation: the start point plus one per move.
    assert_eq!(model.calls.get(), solution.iters + 1);
}

#[test]
fn probing_costs_exactly_one_extra_evaluation() {
    let model = CountingModel::new();

    let solution =
        solve_unobserved(&model, &ScalarTarget, &linear_config()).expect("should solve");

    assert_eq!(model.calls.get(), solution.iters + 2);
}

#[test]
fn converged_start_needs_no_moves() {
    let model = CountingModel::new();
    let config = Config {
        trend: Some(Trend::Increasing),
        ..Config {
            start: 4.5,
            ..linear_config()
        }
    };

    let solution = solve_unobserved(&model, &ScalarTarget, &config).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(model.calls.get(), 1);
}

#[test]
fn flat_probe_assumes_increasing_and_exhausts_iterations() {
    let config = Config {
        max_iters: Some(7),
        ..linear_config()
    };

    let mut ambiguous_events = 0;
    let observer = |event: &Event<'_, f64, f64>| {
        if matches!(event, Event::AmbiguousTrend { .. }) {
            ambiguous_events += 1;
        }
        None
    };

    let solution = solve(&FlatModel, &ScalarTarget, &config, observer).expect("should finish");

    assert_eq!(ambiguous_events, 1);
    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 7);
    assert!(solution.trend_assumed);
    assert_eq!(solution.trend, Trend::Increasing);
    assert_relative_eq!(solution.y, 5.0);
}

#[test]
fn step_halves_only_on_direction_reversals() {
    let mut steps = Vec::new();
    let observer = |event: &Event<'_, f64, f64>| {
        if let Event::Evaluated { step, .. } = event {
            steps.push(*step);
        }
        None
    };

    let solution =
        solve(&LinearModel, &ScalarTarget, &linear_config(), observer).expect("should solve");

    assert_eq!(solution.iters, 6);
    // Five upward moves share the initial step; the reversal halves it.
    assert_eq!(steps[..6], [1.0; 6]);
    assert_relative_eq!(steps[6], 0.5);
}

#[test]
fn clamps_the_search_inside_the_bounds() {
    // Unconstrained crossing at x = 15, outside [0, 10].
    let config = Config {
        tolerance: 0.01,
        min: Some(0.0),
        max: Some(10.0),
        max_iters: Some(30),
        ..Config::new(0.0, 31.0)
    };

    let mut max_seen = f64::NEG_INFINITY;
    let observer = |event: &Event<'_, f64, f64>| {
        if let Event::Evaluated { x, .. } = event {
            max_seen = max_seen.max(*x);
        }
        None
    };

    let solution = solve(&LinearModel, &ScalarTarget, &config, observer).expect("should finish");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 30);
    assert_relative_eq!(solution.x, 10.0);
    assert_relative_eq!(solution.y, 21.0);
    assert_relative_eq!(max_seen, 10.0);
}

#[test]
fn unreachable_target_returns_the_best_found() {
    let config = Config {
        max_iters: Some(10),
        ..Config::new(0.0, 1e9)
    };

    let solution =
        solve_unobserved(&LinearModel, &ScalarTarget, &config).expect("should finish");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 10);
    assert_relative_eq!(solution.x, 10.0);
    assert_relative_eq!(solution.y, 21.0);
    assert!(!solution.is_converged());
}

#[test]
fn runs_unbounded_when_no_limit_is_set() {
    let config = Config {
        max_iters: None,
        ..linear_config()
    };

    let solution =
        solve_unobserved(&LinearModel, &ScalarTarget, &config).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 4.5, epsilon = 1e-10);
}

#[test]
fn scalar_and_mapping_adapters_walk_the_same_trajectory() {
    let mut scalar_xs = Vec::new();
    let scalar_observer = |event: &Event<'_, f64, f64>| {
        if let Event::Evaluated { x, .. } = event {
            scalar_xs.push(*x);
        }
        None
    };
    solve(&LinearModel, &ScalarTarget, &linear_config(), scalar_observer)
        .expect("should solve");

    type Map = HashMap<String, f64>;
    let mut mapping_xs = Vec::new();
    let mapping_observer = |event: &Event<'_, Map, Map>| {
        if let Event::Evaluated { x, .. } = event {
            mapping_xs.push(*x);
        }
        None
    };
    let problem = MappingTarget::new("flow", "capacity");
    let solution = solve(&MapLinearModel, &problem, &linear_config(), mapping_observer)
        .expect("should solve");

    assert_eq!(scalar_xs, mapping_xs);
    assert_relative_eq!(solution.x, 4.5, epsilon = 1e-10);

    // The final output mapping survives, side artifacts included.
    assert_relative_eq!(solution.snapshot.output["power"], 0.4 * solution.x);
    assert_relative_eq!(solution.snapshot.input["flow"], solution.x);
}

#[test]
fn missing_output_key_aborts_the_search() {
    let problem = MappingTarget::new("flow", "cop");

    let result = solve_unobserved(&MapLinearModel, &problem, &linear_config());

    assert!(matches!(result, Err(Error::Problem(_))));
}

#[test]
fn model_failure_aborts_the_search() {
    let model = FailsAbove { threshold: 3.0 };
    let config = Config {
        trend: Some(Trend::Increasing),
        ..linear_config()
    };

    let result = solve_unobserved(&model, &ScalarTarget, &config);

    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn non_finite_observed_value_is_an_error() {
    /// Model whose output is undefined everywhere.
    struct NanModel;

    impl Model for NanModel {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, _x: &f64) -> Result<f64, Self::Error> {
            Ok(f64::NAN)
        }
    }

    let config = Config {
        trend: Some(Trend::Increasing),
        ..linear_config()
    };

    let result = solve_unobserved(&NanModel, &ScalarTarget, &config);

    assert!(matches!(result, Err(Error::NonFiniteObserved { .. })));
}

#[test]
fn invalid_config_fails_before_any_evaluation() {
    let model = CountingModel::new();
    let config = Config {
        step_scaler: 1.0,
        ..linear_config()
    };

    let result = solve_unobserved(&model, &ScalarTarget, &config);

    assert!(matches!(
        result,
        Err(Error::InvalidConfig(ConfigError::StepScaler))
    ));
    assert_eq!(model.calls.get(), 0);
}

#[test]
fn observer_can_stop_the_search_early() {
    let observer = |event: &Event<'_, f64, f64>| {
        if let Event::Evaluated { iter, .. } = event
            && *iter >= 2
        {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution =
        solve(&LinearModel, &ScalarTarget, &linear_config(), observer).expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
}

#[test]
fn report_line_covers_both_outcomes() {
    let solution = solve_unobserved(&LinearModel, &ScalarTarget, &linear_config())
        .expect("should solve");
    assert!(solution.to_string().starts_with("convergence reached"));

    let config = Config {
        max_iters: Some(2),
        ..Config::new(0.0, 1e9)
    };
    let solution =
        solve_unobserved(&LinearModel, &ScalarTarget, &config).expect("should finish");
    assert!(solution.to_string().starts_with("convergence not reached"));
}
