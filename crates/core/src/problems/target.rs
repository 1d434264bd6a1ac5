/// Defines a target-value problem to be solved.
///
/// A target problem maps the solver's single free variable to a model input,
/// then reads a scalar observed value from the model input and output.
/// Solvers vary the free variable until the observed value reaches a
/// caller-supplied target.
///
/// The free variable is deliberately scalar: target searches in this toolkit
/// adjust one knob (a pressure, a temperature, a flow rate) against one
/// observed output. Models with additional inputs hold them fixed, either as
/// model fields or as extra entries in the problem's input mapping.
pub trait TargetProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps the free variable into a model input.
    ///
    /// Implementations must build a fresh input on every call; no state may
    /// leak from one evaluation to the next.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: f64) -> Result<Self::Input, Self::Error>;

    /// Reads the observed value from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the observed value cannot be read.
    fn observed(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
