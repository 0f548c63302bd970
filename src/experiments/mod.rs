//! Built-in experiment registrations.
//!
//! This module provides the 17 experiments of the standard catalog, grouped
//! by physics area. Each registration function builds one
//! [`ExperimentDefinition`]: the display text, the literal parameter table,
//! and the computation closure. The engine treats every entry uniformly;
//! everything experiment-specific lives here.

use crate::error::{LabError, Result};
use crate::experiment::ExperimentDefinition;

mod electromagnetism;
mod modern;
mod optics;
mod solid_state;
mod waves;

pub use electromagnetism::{coil_axis_field, e_over_m, lcr_resonance};
pub use modern::plancks_constant;
pub use optics::{
    brewsters_law, laser_grating, mercury_spectrum, newtons_rings, numerical_aperture,
    slit_diffraction,
};
pub use solid_state::{band_gap, diode_characteristics, hall_effect, solar_cell, thermistor};
pub use waves::{meldes_string, ultrasonic_diffraction};

/// All built-in experiments in catalog display order (1 through 17).
pub fn all() -> Vec<ExperimentDefinition> {
    vec![
        newtons_rings(),
        mercury_spectrum(),
        brewsters_law(),
        laser_grating(),
        plancks_constant(),
        band_gap(),
        solar_cell(),
        slit_diffraction(),
        hall_effect(),
        ultrasonic_diffraction(),
        meldes_string(),
        lcr_resonance(),
        coil_axis_field(),
        e_over_m(),
        diode_characteristics(),
        numerical_aperture(),
        thermistor(),
    ]
}

/// Unpack positional arguments into a fixed-size array, rejecting a
/// mismatched count.
pub(crate) fn unpack<const N: usize>(args: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(args).map_err(|_| {
        LabError::Computation(format!("expected {N} arguments, got {}", args.len()))
    })
}

/// Guard a denominator against zero before dividing by it.
pub(crate) fn nonzero(value: f64, name: &str) -> Result<f64> {
    if value == 0.0 {
        Err(LabError::Computation(format!(
            "division by zero denominator: {name}"
        )))
    } else {
        Ok(value)
    }
}

/// Square root with an explicit domain check.
pub(crate) fn checked_sqrt(value: f64) -> Result<f64> {
    if value < 0.0 {
        Err(LabError::Computation(format!(
            "square root of negative value: {value}"
        )))
    } else {
        Ok(value.sqrt())
    }
}

/// Normalized sinc: sin(πx)/(πx), with sinc(0) = 1.
pub(crate) fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = std::f64::consts::PI * x;
        px.sin() / px
    }
}
