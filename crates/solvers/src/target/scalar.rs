use std::convert::Infallible;

use glide_core::TargetProblem;

/// Target problem for models that already speak scalars.
///
/// The free variable is passed straight through as the model input, and the
/// model output is read back as the observed value. Fixed extra inputs belong
/// on the model itself, as struct fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarTarget;

impl TargetProblem for ScalarTarget {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: f64) -> Result<f64, Infallible> {
        Ok(x)
    }

    fn observed(&self, _input: &f64, output: &f64) -> Result<f64, Infallible> {
        Ok(*output)
    }
}
