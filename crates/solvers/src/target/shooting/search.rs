use std::error::Error as StdError;

use glide_core::{Model, Observer, TargetProblem};

use crate::target::{EvalError, Evaluation, evaluate};

use super::{
    Action, Config, Error, Event, Solution, Trend,
    solution::Status,
    state::State,
    trend::Deviation,
};

/// Core shooting search implementation.
///
/// Validates the config, resolves the trend (probing when necessary), then
/// walks the free variable toward the target. The start-point evaluation from
/// the probe is reused as iteration zero, so probing costs exactly one extra
/// model call.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: TargetProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;

    let mut state = State::new(config);

    let (trend, trend_assumed, mut eval) = match config.trend {
        Some(trend) => (trend, false, checked(evaluate(model, problem, state.x()))?),
        None => {
            let start = checked(evaluate(model, problem, state.x()))?;
            let probe = checked(evaluate(
                model,
                problem,
                state.x() + config.initial_step,
            ))?;

            match Trend::probed(start.y, probe.y, config.initial_step) {
                Some(trend) => {
                    let event = Event::TrendProbed {
                        x: start.x,
                        y: start.y,
                        probe_y: probe.y,
                        trend,
                    };
                    if let Some(Action::StopEarly) = observer.observe(&event) {
                        return Ok(Solution::from_eval(
                            start,
                            Status::StoppedByObserver,
                            0,
                            trend,
                            false,
                            config.target,
                        ));
                    }
                    (trend, false, start)
                }
                None => {
                    let event = Event::AmbiguousTrend {
                        x: start.x,
                        y: start.y,
                    };
                    if let Some(Action::StopEarly) = observer.observe(&event) {
                        return Ok(Solution::from_eval(
                            start,
                            Status::StoppedByObserver,
                            0,
                            Trend::Increasing,
                            true,
                            config.target,
                        ));
                    }
                    (Trend::Increasing, true, start)
                }
            }
        }
    };

    let mut iters = 0;
    loop {
        let event = Event::Evaluated {
            iter: iters,
            x: eval.x,
            y: eval.y,
            target: config.target,
            deviation: eval.y - config.target,
            step: state.step(),
            input: &eval.snapshot.input,
            output: &eval.snapshot.output,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(
                eval,
                Status::StoppedByObserver,
                iters,
                trend,
                trend_assumed,
                config.target,
            ));
        }

        let Some(deviation) = Deviation::classify(eval.y, config.target, config.tolerance) else {
            return Ok(Solution::from_eval(
                eval,
                Status::Converged,
                iters,
                trend,
                trend_assumed,
                config.target,
            ));
        };

        if config.max_iters.is_some_and(|limit| iters >= limit) {
            return Ok(Solution::from_eval(
                eval,
                Status::MaxIters,
                iters,
                trend,
                trend_assumed,
                config.target,
            ));
        }

        iters += 1;
        state.advance(trend.correction(deviation), config);
        eval = checked(evaluate(model, problem, state.x()))?;
    }
}

/// Lifts an evaluation result to the solver error type, rejecting non-finite
/// observed values.
fn checked<I, O, ME, PE>(
    result: Result<Evaluation<I, O>, EvalError<ME, PE>>,
) -> Result<Evaluation<I, O>, Error>
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    let eval = result?;
    if !eval.y.is_finite() {
        return Err(Error::NonFiniteObserved {
            x: eval.x,
            y: eval.y,
        });
    }
    Ok(eval)
}
