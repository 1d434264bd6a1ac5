use std::collections::HashMap;

use thiserror::Error;

use glide_core::TargetProblem;

/// Errors that can occur when reading values through a [`MappingTarget`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The model output does not contain the configured output key.
    #[error("output key `{key}` is missing from the model output")]
    MissingKey { key: String },
}

/// Target problem for models that exchange named values.
///
/// The free variable is written under `input_key` into a fresh clone of the
/// base mapping before every call, and the observed value is read from the
/// model output under `output_key`. Because each evaluation builds its own
/// input map, no state leaks between calls or between solves.
///
/// The model's full output mapping survives in the solution snapshot, so any
/// additional fields it computed — intermediate state points, power draws,
/// mass flows — remain available after the search.
#[derive(Debug, Clone)]
pub struct MappingTarget {
    input_key: String,
    output_key: String,
    base: HashMap<String, f64>,
}

impl MappingTarget {
    /// Creates a mapping target that varies `input_key` and observes
    /// `output_key`.
    #[must_use]
    pub fn new(input_key: impl Into<String>, output_key: impl Into<String>) -> Self {
        Self {
            input_key: input_key.into(),
            output_key: output_key.into(),
            base: HashMap::new(),
        }
    }

    /// Adds a fixed input shared by every evaluation.
    #[must_use]
    pub fn with_input(mut self, key: impl Into<String>, value: f64) -> Self {
        self.base.insert(key.into(), value);
        self
    }

    /// Replaces all fixed inputs shared by every evaluation.
    #[must_use]
    pub fn with_inputs(mut self, base: HashMap<String, f64>) -> Self {
        self.base = base;
        self
    }

    /// Returns the key holding the free variable.
    #[must_use]
    pub fn input_key(&self) -> &str {
        &self.input_key
    }

    /// Returns the key holding the observed value.
    #[must_use]
    pub fn output_key(&self) -> &str {
        &self.output_key
    }
}

impl TargetProblem for MappingTarget {
    type Input = HashMap<String, f64>;
    type Output = HashMap<String, f64>;
    type Error = MappingError;

    fn input(&self, x: f64) -> Result<Self::Input, MappingError> {
        let mut input = self.base.clone();
        input.insert(self.input_key.clone(), x);
        Ok(input)
    }

    fn observed(&self, _input: &Self::Input, output: &Self::Output) -> Result<f64, MappingError> {
        output
            .get(&self.output_key)
            .copied()
            .ok_or_else(|| MappingError::MissingKey {
                key: self.output_key.clone(),
            })
    }
}
