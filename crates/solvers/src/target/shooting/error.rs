use std::error::Error as StdError;

use thiserror::Error;

use crate::target::EvalError;

use super::ConfigError;

/// Errors that can occur during a shooting solve.
///
/// Iteration exhaustion is deliberately absent: running out of iterations
/// yields a non-converged [`Solution`](super::Solution), not an error, so
/// callers can inspect the partial progress and decide for themselves.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config")]
    InvalidConfig(#[from] ConfigError),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    /// An evaluation produced NaN or an infinity.
    ///
    /// The search aborts rather than step from an undefined output.
    #[error("non-finite observed value {y} at x = {x}")]
    NonFiniteObserved { x: f64, y: f64 },
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
