use thiserror::Error;

use glide_core::{Model, Snapshot, TargetProblem};

/// The result of evaluating a target problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    /// The free variable that was evaluated.
    pub x: f64,
    /// The observed value at `x`.
    pub y: f64,
    /// The captured model input/output pair.
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating a target problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),
    /// Failed to construct the input or read the observed value.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as TargetProblem>::Error>,
>;

/// Evaluates the model in the context of a target problem.
///
/// This function maps `x` to a model input, calls the model, then reads the
/// observed value from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, the model call, or reading the observed
/// value fails.
pub fn evaluate<M, P>(model: &M, problem: &P, x: f64) -> EvaluateResult<M, P>
where
    M: Model,
    P: TargetProblem<Input = M::Input, Output = M::Output>,
{
    let input = problem.input(x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let y = problem.observed(&input, &output).map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        y,
        snapshot: Snapshot::new(input, output),
    })
}
