//! Experiment definition
//!
//! This module defines [`ExperimentDefinition`], one catalog entry pairing
//! explanatory text with declared parameters and a pure computation. The
//! computation is carried as data: a boxed closure from an ordered slice of
//! numeric arguments (one per declared parameter, in declaration order) to a
//! series, optionally with a derived scalar. Each experiment registers its
//! own closure once; nothing outside the closure knows which formula it
//! implements.

use crate::error::Result;
use crate::parameters::{ParameterError, ParameterSpec};
use crate::series::SimOutput;
use std::collections::HashSet;
use std::fmt;

/// The computation capability every experiment provides: an ordered list of
/// numeric parameter values in, a curve (with optional scalar) or a
/// computation error out.
pub type ComputeFn = Box<dyn Fn(&[f64]) -> Result<SimOutput> + Send + Sync>;

/// One catalog entry: display text, ordered parameter specifications, and
/// the computation that turns concrete parameter values into output.
///
/// The name carries an ordinal prefix (`"1. …"` through `"17. …"`) that
/// establishes catalog display order; there is no separate sort field.
/// Definitions are built once at startup and never mutated.
pub struct ExperimentDefinition {
    name: String,
    theory: String,
    description: String,
    formula: String,
    parameters: Vec<ParameterSpec>,
    compute: ComputeFn,
}

impl ExperimentDefinition {
    /// Create a new experiment definition
    ///
    /// # Arguments
    ///
    /// * `name` - Unique display key with ordinal prefix
    /// * `theory` - Explanatory theory text (opaque to the engine)
    /// * `description` - Short task description (opaque to the engine)
    /// * `formula` - Formula display string (opaque, never interpreted)
    /// * `parameters` - Ordered specs; order defines positional argument
    ///   order for the computation
    /// * `compute` - The computation, one argument per parameter
    ///
    /// # Returns
    ///
    /// A new definition, or an error if two parameters share a label.
    pub fn new<F>(
        name: &str,
        theory: &str,
        description: &str,
        formula: &str,
        parameters: Vec<ParameterSpec>,
        compute: F,
    ) -> std::result::Result<Self, ParameterError>
    where
        F: Fn(&[f64]) -> Result<SimOutput> + Send + Sync + 'static,
    {
        let mut seen = HashSet::new();
        for spec in &parameters {
            if !seen.insert(spec.label.as_str()) {
                return Err(ParameterError::DuplicateLabel {
                    label: spec.label.clone(),
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            theory: theory.to_string(),
            description: description.to_string(),
            formula: formula.to_string(),
            parameters,
            compute: Box::new(compute),
        })
    }

    /// The unique display key, ordinal prefix included.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explanatory theory text.
    pub fn theory(&self) -> &str {
        &self.theory
    }

    /// Short task description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Formula display string; never interpreted by the engine.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// The ordered parameter specifications.
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Invoke the computation with positional arguments.
    ///
    /// Callers are expected to pass one value per declared parameter, in
    /// declaration order; the computation itself rejects a mismatched count.
    pub fn compute(&self, args: &[f64]) -> Result<SimOutput> {
        (self.compute)(args)
    }
}

impl fmt::Debug for ExperimentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExperimentDefinition")
            .field("name", &self.name)
            .field("formula", &self.formula)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}
