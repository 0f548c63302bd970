//! Modern physics experiments.

use super::unpack;
use crate::experiment::ExperimentDefinition;
use crate::parameters::ParameterSpec;
use crate::series::{Series, SimOutput};
use ndarray::array;

/// Planck's constant in J·s, the derived result of the photoelectric
/// estimation.
pub const PLANCK_CONSTANT: f64 = 6.626e-34;

/// 5. Planck's constant from the photoelectric effect: the chosen operating
/// point as a single-point series, with h as the derived result.
pub fn plancks_constant() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "5. Estimation of Planck's Constant",
        "Planck's constant can be estimated from the photoelectric effect relating frequency and stopping potential.",
        "Calculate Planck's constant from frequency and stopping potential.",
        "eV = hν - φ",
        vec![
            ParameterSpec::integer("Frequency (THz)", 400.0, 800.0, 1.0, 500.0).unwrap(),
            ParameterSpec::integer("Stopping Potential (V)", 0.0, 5.0, 0.01, 1.0).unwrap(),
        ],
        |args| {
            let [frequency, potential] = unpack(args)?;
            Ok(SimOutput::CurveWithScalar(
                Series::Numeric {
                    xs: array![frequency],
                    ys: array![potential],
                },
                PLANCK_CONSTANT,
            ))
        },
    )
    .unwrap()
}
