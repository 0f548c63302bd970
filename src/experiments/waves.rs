//! Wave and vibration experiments.

use super::{checked_sqrt, nonzero, unpack};
use crate::experiment::ExperimentDefinition;
use crate::parameters::ParameterSpec;
use crate::series::{Series, SimOutput};
use ndarray::Array1;

/// 10. Ultrasonic diffraction: fringe spacing per fringe count,
/// λ = (x₂ - x₁) / n.
pub fn ultrasonic_diffraction() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "10. Ultrasonic Diffraction",
        "Ultrasonic waves diffract light producing fringes similar to optical diffraction.",
        "Find wavelength and velocity of ultrasonic waves in liquid.",
        "λ = (x₂ - x₁) / n",
        vec![
            ParameterSpec::integer("Separation distance (mm)", 1.0, 10.0, 0.1, 5.0).unwrap(),
            ParameterSpec::integer("Number of fringes (n)", 1.0, 10.0, 1.0, 5.0).unwrap(),
        ],
        |args| {
            let [_d, n] = unpack(args)?;
            let n = nonzero(n, "fringe count")?;
            let xs = Array1::linspace(1.0, 10.0, 10);
            let ys = xs.mapv(|x| x / n);
            Ok(SimOutput::Curve(Series::Numeric { xs, ys }))
        },
    )
    .unwrap()
}

/// 11. Melde's string: supply frequency f = (1/2L)√(T/μ) shown as a level
/// across the string-length range.
pub fn meldes_string() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "11. Melde’s String Experiment",
        "Melde’s experiment determines frequency of AC supply using transverse or longitudinal vibrations.",
        "Calculate frequency using tension and linear density.",
        "f = (1/2L) √(T/μ)",
        vec![
            ParameterSpec::integer("Tension (N)", 0.1, 10.0, 0.1, 1.0).unwrap(),
            ParameterSpec::integer("Length (m)", 0.1, 2.0, 0.1, 1.0).unwrap(),
            ParameterSpec::real("Mass per unit length (kg/m)", 0.001, 0.1, 0.001, 0.01).unwrap(),
        ],
        |args| {
            let [tension, length, density] = unpack(args)?;
            let xs = Array1::linspace(0.1, 2.0, 100);
            let speed = checked_sqrt(tension / nonzero(density, "μ")?)?;
            let frequency = speed / nonzero(2.0 * length, "2L")?;
            let ys = Array1::from_elem(xs.len(), frequency);
            Ok(SimOutput::Curve(Series::Numeric { xs, ys }))
        },
    )
    .unwrap()
}
