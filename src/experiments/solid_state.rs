//! Solid-state and semiconductor experiments.

use super::unpack;
use crate::experiment::ExperimentDefinition;
use crate::parameters::ParameterSpec;
use crate::series::{Series, SimOutput};
use ndarray::Array1;

/// 6. Semiconductor band gap from the temperature dependence of resistance;
/// the reference curve exp(-300/T) with the silicon gap 1.12 eV as the
/// derived result.
pub fn band_gap() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "6. Energy Band Gap of Semiconductor",
        "Energy band gap of a semiconductor is determined from temperature dependence of resistance.",
        "Determine band gap of semiconductor using temperature and resistance.",
        "Eg = 2kT ln(R2/R1)",
        vec![
            ParameterSpec::integer("Temperature (K)", 250.0, 350.0, 1.0, 300.0).unwrap(),
            ParameterSpec::integer("Resistance (Ω)", 100.0, 1000.0, 10.0, 500.0).unwrap(),
        ],
        |args| {
            let [_t, _r] = unpack(args)?;
            let xs = Array1::linspace(250.0, 350.0, 100);
            let ys = xs.mapv(|x: f64| (-300.0 / x).exp());
            Ok(SimOutput::CurveWithScalar(Series::Numeric { xs, ys }, 1.12))
        },
    )
    .unwrap()
}

/// 7. Solar cell I-V characteristics: linear drop from short-circuit current
/// to open-circuit voltage, scaled by light intensity.
pub fn solar_cell() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "7. Solar Cell Characteristics",
        "Solar cell characteristics are studied by measuring current-voltage behavior under illumination.",
        "Plot I-V characteristics of a solar cell.",
        "I = I₀ (exp(qV/kT) - 1)",
        vec![ParameterSpec::integer("Light intensity (%)", 10.0, 100.0, 10.0, 50.0).unwrap()],
        |args| {
            let [intensity] = unpack(args)?;
            let xs = Array1::linspace(0.0, 1.0, 100);
            let ys = xs.mapv(|x| intensity * (1.0 - x));
            Ok(SimOutput::Curve(Series::Numeric { xs, ys }))
        },
    )
    .unwrap()
}

/// 9. Hall effect: Hall voltage rising linearly with the applied field.
pub fn hall_effect() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "9. Hall Effect Experiment",
        "The Hall effect determines carrier concentration and type of charge carriers in semiconductors.",
        "Study Hall voltage variation with magnetic field.",
        "V_H = (IB) / (net)",
        vec![
            ParameterSpec::real("Magnetic field (T)", 0.1, 2.0, 0.1, 1.0).unwrap(),
            ParameterSpec::real("Current (A)", 0.01, 0.1, 0.01, 0.05).unwrap(),
        ],
        |args| {
            let [_b, current] = unpack(args)?;
            let xs = Array1::linspace(0.0, 2.0, 100);
            let ys = xs.mapv(|x| current * x);
            Ok(SimOutput::Curve(Series::Numeric { xs, ys }))
        },
    )
    .unwrap()
}

/// 15. Diode forward characteristics: the exponential ideal-diode curve.
pub fn diode_characteristics() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "15. Semiconductor Diode Characteristics",
        "Study V-I characteristics of semiconductor diode in forward and reverse bias.",
        "Plot diode current vs voltage characteristics.",
        "I = I₀ (exp(qV/kT) - 1)",
        vec![ParameterSpec::real("Voltage (V)", 0.0, 1.0, 0.01, 0.5).unwrap()],
        |args| {
            let [_v] = unpack(args)?;
            let xs = Array1::linspace(0.0, 1.0, 100);
            let ys = xs.mapv(|x: f64| (20.0 * x).exp() - 1.0);
            Ok(SimOutput::Curve(Series::Numeric { xs, ys }))
        },
    )
    .unwrap()
}

/// 17. Thermistor characteristics: resistance falling exponentially with
/// temperature, β = 3500 K.
pub fn thermistor() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "17. Study of Thermistor Characteristics",
        "Thermistors show resistance changes with temperature, used for sensing and control.",
        "Plot resistance vs temperature characteristics.",
        "R = R₀ exp(β(1/T - 1/T₀))",
        vec![ParameterSpec::integer("Temperature (°C)", 0.0, 100.0, 1.0, 25.0).unwrap()],
        |args| {
            let [_t] = unpack(args)?;
            // Celsius axis for display, Kelvin for the exponent
            let xs = Array1::linspace(0.0, 100.0, 100);
            let kelvin = Array1::linspace(273.0, 373.0, 100);
            let ys = kelvin.mapv(|t: f64| (3500.0 * (1.0 / t - 1.0 / 298.0)).exp());
            Ok(SimOutput::Curve(Series::Numeric { xs, ys }))
        },
    )
    .unwrap()
}
