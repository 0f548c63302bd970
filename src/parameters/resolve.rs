//! Input resolution
//!
//! Translates a raw [`ParameterSpec`] into an effective, runtime-safe
//! bounded-control description for the presentation surface. The one defect
//! this layer corrects is a degenerate "no increment" declaration: a declared
//! step of zero would make a slider unusable, so it is replaced with a fixed
//! constant (`1` for integer controls, `0.01` for real ones). The constants
//! are a defect-tolerance policy, deliberately not derived from the
//! parameter's range.
//!
//! No range validation happens here: out-of-range input is prevented by the
//! presentation surface honoring the resolved bounds, not by re-checking at
//! run time.

use crate::parameters::spec::{ParamKind, ParameterSpec};
use serde::{Deserialize, Serialize};

/// Fallback step for an integer control declared with step zero.
const INTEGER_STEP_FALLBACK: i64 = 1;

/// Fallback step for a real control declared with step zero.
const REAL_STEP_FALLBACK: f64 = 0.01;

/// A slider-ready control description, cast to the spec's numeric kind.
///
/// Integer controls carry whole-number bounds and step; real controls keep
/// full f64 precision. The step is never zero in either variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ResolvedControl {
    Integer {
        min: i64,
        max: i64,
        default: i64,
        step: i64,
    },
    Real {
        min: f64,
        max: f64,
        default: f64,
        step: f64,
    },
}

/// Return the effective step for a spec, correcting a declared zero.
///
/// A declared step of `0.0` becomes `1.0` for integer-kind specs and `0.01`
/// for real-kind specs; any other declared step passes through unchanged.
///
/// # Examples
///
/// ```
/// use physlab_rs::parameters::{effective_step, ParameterSpec};
///
/// let spec = ParameterSpec::real("x", 0.0, 1.0, 0.0, 0.5).unwrap();
/// assert_eq!(effective_step(&spec), 0.01);
///
/// let spec = ParameterSpec::real("x", 0.0, 1.0, 0.05, 0.5).unwrap();
/// assert_eq!(effective_step(&spec), 0.05);
/// ```
pub fn effective_step(spec: &ParameterSpec) -> f64 {
    if spec.step == 0.0 {
        match spec.kind {
            ParamKind::Integer => INTEGER_STEP_FALLBACK as f64,
            ParamKind::Real => REAL_STEP_FALLBACK,
        }
    } else {
        spec.step
    }
}

/// Resolve a spec into a control description cast to its kind.
///
/// Integer-kind specs truncate min/max/default/step to whole numbers (exact
/// for values that are already whole); real-kind specs keep the declared
/// values. A fractional step that truncates to zero on an integer control is
/// lifted to `1`, so no resolved control ever carries a zero step.
pub fn resolve(spec: &ParameterSpec) -> ResolvedControl {
    let step = effective_step(spec);

    match spec.kind {
        ParamKind::Integer => {
            let step = step as i64;
            ResolvedControl::Integer {
                min: spec.min as i64,
                max: spec.max as i64,
                default: spec.default as i64,
                step: if step == 0 { INTEGER_STEP_FALLBACK } else { step },
            }
        }
        ParamKind::Real => ResolvedControl::Real {
            min: spec.min,
            max: spec.max,
            default: spec.default,
            step,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_step_zero_integer() {
        let spec = ParameterSpec::integer("n", 1.0, 20.0, 0.0, 1.0).unwrap();
        assert_eq!(effective_step(&spec), 1.0);
    }

    #[test]
    fn test_effective_step_zero_real() {
        let spec = ParameterSpec::real("x", 0.0, 5.0, 0.0, 1.0).unwrap();
        assert_eq!(effective_step(&spec), 0.01);
    }

    #[test]
    fn test_effective_step_passthrough() {
        let spec = ParameterSpec::real("x", 0.0003, 0.0008, 0.00001, 0.0006).unwrap();
        assert_eq!(effective_step(&spec), 0.00001);

        let spec = ParameterSpec::integer("V", 50.0, 500.0, 10.0, 200.0).unwrap();
        assert_eq!(effective_step(&spec), 10.0);
    }

    #[test]
    fn test_resolve_integer() {
        let spec = ParameterSpec::integer("Turns (N)", 10.0, 200.0, 1.0, 100.0).unwrap();
        assert_eq!(
            resolve(&spec),
            ResolvedControl::Integer {
                min: 10,
                max: 200,
                default: 100,
                step: 1,
            }
        );
    }

    #[test]
    fn test_resolve_real() {
        let spec = ParameterSpec::real("B (T)", 0.1, 2.0, 0.1, 1.0).unwrap();
        assert_eq!(
            resolve(&spec),
            ResolvedControl::Real {
                min: 0.1,
                max: 2.0,
                default: 1.0,
                step: 0.1,
            }
        );
    }

    #[test]
    fn test_resolve_integer_truncates_fractional_bounds() {
        // Catalog entries pair integer defaults with fractional bounds;
        // casting truncates toward zero, matching the slider contract.
        let spec = ParameterSpec::integer("Tension (N)", 0.1, 10.0, 0.1, 1.0).unwrap();
        match resolve(&spec) {
            ResolvedControl::Integer {
                min,
                max,
                default,
                step,
            } => {
                assert_eq!(min, 0);
                assert_eq!(max, 10);
                assert_eq!(default, 1);
                // 0.1 truncates to 0; the resolved step must never be zero
                assert_eq!(step, 1);
            }
            _ => panic!("Expected Integer control"),
        }
    }

    #[test]
    fn test_resolved_step_never_zero() {
        let specs = [
            ParameterSpec::integer("a", 0.0, 10.0, 0.0, 5.0).unwrap(),
            ParameterSpec::integer("b", 0.0, 10.0, 0.5, 5.0).unwrap(),
            ParameterSpec::real("c", 0.0, 10.0, 0.0, 5.0).unwrap(),
        ];

        for spec in &specs {
            match resolve(spec) {
                ResolvedControl::Integer { step, .. } => assert_ne!(step, 0),
                ResolvedControl::Real { step, .. } => assert_ne!(step, 0.0),
            }
        }
    }
}
