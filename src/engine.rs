//! Simulation engine
//!
//! The uniform execution contract over the heterogeneous catalog: build the
//! positional argument list in declared parameter order, invoke the
//! experiment's computation, and normalize whatever it returns into a
//! [`RunResult`] — or report a [`LabError::Computation`] describing why the
//! run produced nothing. The engine never special-cases an experiment by
//! name, never re-validates bounds (the presentation surface honors the
//! resolved controls), and holds no state: a failed run leaves everything
//! exactly as before the call.

use crate::error::{LabError, Result};
use crate::experiment::ExperimentDefinition;
use crate::series::{RunResult, SimOutput};
use std::collections::HashMap;

/// Execute one experiment run with the given input values.
///
/// # Arguments
///
/// * `definition` - The experiment to run
/// * `inputs` - One value per declared parameter, keyed by label. The
///   upstream contract guarantees exactly the declared labels within
///   resolved bounds; a missing label is surfaced as a computation error,
///   extra labels are ignored.
///
/// # Returns
///
/// The normalized result: the series to plot, plus the derived scalar when
/// the experiment produces one. Any failure inside the computation — numeric
/// domain errors, arity mismatches, a malformed series — is caught at this
/// boundary and returned as [`LabError::Computation`]; it is never retried.
///
/// For fixed inputs the result is bit-identical across calls: computations
/// are pure, and the engine adds no caching.
pub fn run(definition: &ExperimentDefinition, inputs: &HashMap<String, f64>) -> Result<RunResult> {
    let mut args = Vec::with_capacity(definition.parameters().len());
    for spec in definition.parameters() {
        let value = inputs.get(&spec.label).ok_or_else(|| {
            LabError::Computation(format!("missing input value for '{}'", spec.label))
        })?;
        args.push(*value);
    }

    let output = definition.compute(&args)?;

    let result = match output {
        SimOutput::Curve(series) => RunResult {
            series,
            scalar: None,
        },
        SimOutput::CurveWithScalar(series, scalar) => RunResult {
            series,
            scalar: Some(scalar),
        },
    };

    if let Some(violation) = result.series.violation() {
        return Err(LabError::Computation(violation));
    }

    if let Some(scalar) = result.scalar {
        if !scalar.is_finite() {
            return Err(LabError::Computation(format!(
                "non-finite derived result: {scalar}"
            )));
        }
    }

    Ok(result)
}

/// Execute a run with every parameter at its declared default.
///
/// Convenience for smoke-checking catalog entries; equivalent to calling
/// [`run`] with the defaults collected into a map.
pub fn run_with_defaults(definition: &ExperimentDefinition) -> Result<RunResult> {
    let inputs = definition
        .parameters()
        .iter()
        .map(|spec| (spec.label.clone(), spec.default))
        .collect();
    run(definition, &inputs)
}
