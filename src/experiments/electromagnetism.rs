//! Electromagnetism experiments: resonance, field profiles, and charge
//! dynamics.

use super::{checked_sqrt, nonzero, unpack};
use crate::experiment::ExperimentDefinition;
use crate::parameters::ParameterSpec;
use crate::series::{Series, SimOutput};
use ndarray::Array1;
use std::f64::consts::PI;

/// 12. LCR resonance: the resonant frequency f = 1 / (2π√(LC)) shown as a
/// level across the frequency sweep.
pub fn lcr_resonance() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "12. LCR Circuit Resonance",
        "At resonance, the inductive and capacitive reactances cancel, giving maximum current.",
        "Verify resonance in an LCR circuit.",
        "f = 1 / (2π√(LC))",
        vec![
            ParameterSpec::real("Inductance (H)", 0.001, 1.0, 0.001, 0.1).unwrap(),
            ParameterSpec::integer("Capacitance (μF)", 0.1, 100.0, 0.1, 10.0).unwrap(),
        ],
        |args| {
            let [inductance, capacitance] = unpack(args)?;
            let xs = Array1::linspace(10.0, 1000.0, 200);
            let root = checked_sqrt(inductance * (capacitance * 1e-6))?;
            let frequency = 1.0 / nonzero(2.0 * PI * root, "2π√(LC)")?;
            let ys = Array1::from_elem(xs.len(), frequency);
            Ok(SimOutput::Curve(Series::Numeric { xs, ys }))
        },
    )
    .unwrap()
}

/// 13. Magnetic field along a coil axis by Biot-Savart:
/// B(x) = μ₀NIa² / (2(a² + x²)^(3/2)).
pub fn coil_axis_field() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "13. Magnetic Field along Axis of Coil",
        "The magnetic field at a point on the axis of a coil carrying current is determined using Biot–Savart law.",
        "Calculate magnetic field along coil axis.",
        "B = (μ₀NIa²) / (2(a² + x²)^(3/2))",
        vec![
            ParameterSpec::integer("Current (A)", 0.1, 5.0, 0.1, 1.0).unwrap(),
            ParameterSpec::integer("Radius (cm)", 1.0, 10.0, 0.1, 5.0).unwrap(),
            ParameterSpec::integer("Turns (N)", 10.0, 200.0, 1.0, 100.0).unwrap(),
        ],
        |args| {
            let [current, radius, turns] = unpack(args)?;
            let mu0 = 4.0 * PI * 1e-7;
            let xs = Array1::linspace(-10.0, 10.0, 200);
            let numerator = mu0 * turns * current * radius * radius;
            let ys = xs.mapv(|x| numerator / (2.0 * (radius * radius + x * x).powf(1.5)));
            Ok(SimOutput::Curve(Series::Numeric { xs, ys }))
        },
    )
    .unwrap()
}

/// 14. e/m by Thomson's method: the charge-to-mass ratio 2V / (B²r²) shown
/// as a level across the deflection range.
pub fn e_over_m() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "14. Determination of e/m by Thomson’s Method",
        "Electron charge-to-mass ratio is determined by balancing electric and magnetic forces on electron beam.",
        "Find e/m using deflection method.",
        "e/m = 2V / (B²r²)",
        vec![
            ParameterSpec::integer("Voltage (V)", 50.0, 500.0, 10.0, 200.0).unwrap(),
            ParameterSpec::real("Magnetic field (T)", 0.001, 0.01, 0.001, 0.005).unwrap(),
            ParameterSpec::integer("Radius (cm)", 1.0, 10.0, 1.0, 5.0).unwrap(),
        ],
        |args| {
            let [voltage, field, radius] = unpack(args)?;
            let xs = Array1::linspace(0.0, 10.0, 100);
            let ratio = 2.0 * voltage / nonzero(field * field * radius * radius, "B²r²")?;
            let ys = Array1::from_elem(xs.len(), ratio);
            Ok(SimOutput::Curve(Series::Numeric { xs, ys }))
        },
    )
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lcr_resonant_frequency() {
        let def = lcr_resonance();
        let out = def.compute(&[0.1, 10.0]).unwrap();
        match out {
            SimOutput::Curve(Series::Numeric { xs, ys }) => {
                assert_eq!(xs.len(), 200);
                let expected = 1.0 / (2.0 * PI * (0.1_f64 * 10e-6).sqrt());
                for &y in ys.iter() {
                    assert_relative_eq!(y, expected, epsilon = 1e-9);
                }
            }
            _ => panic!("Expected numeric series"),
        }
    }

    #[test]
    fn test_coil_field_peaks_at_center() {
        let def = coil_axis_field();
        let out = def.compute(&[1.0, 5.0, 100.0]).unwrap();
        match out {
            SimOutput::Curve(Series::Numeric { xs, ys }) => {
                let (imax, _) = ys
                    .iter()
                    .enumerate()
                    .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
                    .unwrap();
                // Maximum sits at the axis position closest to the coil plane
                assert!(xs[imax].abs() < 0.1);
                // Symmetric profile
                let n = ys.len();
                for i in 0..n / 2 {
                    assert_relative_eq!(ys[i], ys[n - 1 - i], epsilon = 1e-12);
                }
            }
            _ => panic!("Expected numeric series"),
        }
    }

    #[test]
    fn test_e_over_m_value() {
        let def = e_over_m();
        let out = def.compute(&[200.0, 0.005, 5.0]).unwrap();
        match out {
            SimOutput::Curve(Series::Numeric { ys, .. }) => {
                let expected = 2.0 * 200.0 / (0.005 * 0.005 * 25.0);
                assert_relative_eq!(ys[0], expected, epsilon = 1e-9);
            }
            _ => panic!("Expected numeric series"),
        }
    }

    #[test]
    fn test_e_over_m_degenerate_field_fails() {
        let def = e_over_m();
        let err = def.compute(&[200.0, 0.0, 5.0]).unwrap_err();
        assert!(err.to_string().contains("division by zero"));
    }
}
