//! Optics experiments: interference, diffraction, polarization, and fiber
//! optics.

use super::{nonzero, sinc, unpack};
use crate::experiment::ExperimentDefinition;
use crate::parameters::ParameterSpec;
use crate::series::{Series, SimOutput};
use ndarray::Array1;
use std::f64::consts::PI;

/// The five visible mercury spectral lines and their wavelengths in μm.
const MERCURY_LINES: [(&str, f64); 5] = [
    ("Violet", 0.4047),
    ("Blue", 0.4358),
    ("Green", 0.5461),
    ("Yellow", 0.5770),
    ("Orange", 0.6234),
];

/// 1. Newton's rings: interference fringe profile and the lens radius of
/// curvature R = r² / (n λ).
pub fn newtons_rings() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "1. Radius of Curvature by Newton's Rings",
        "Newton's rings are interference patterns formed by reflection between a plano-convex lens and a flat glass plate.",
        "Find the radius of curvature of a plano-convex lens.",
        "R = r² / (n × λ)",
        vec![
            ParameterSpec::real("Radius of ring (cm)", 0.1, 10.0, 0.1, 0.5).unwrap(),
            ParameterSpec::real("Wavelength (μm)", 0.0003, 0.0008, 0.00001, 0.0006).unwrap(),
            ParameterSpec::integer("Ring order (n)", 1.0, 20.0, 1.0, 1.0).unwrap(),
        ],
        |args| {
            let [r, wl, n] = unpack(args)?;
            let xs = Array1::linspace(0.0, r * 2.0, 400);
            let ys = xs.mapv(|x| (2.0 * PI * x / wl).sin().powi(2));
            let radius = r * r / nonzero(n * wl, "n × λ")?;
            Ok(SimOutput::CurveWithScalar(Series::Numeric { xs, ys }, radius))
        },
    )
    .unwrap()
}

/// 2. Mercury spectrum: diffraction angle per spectral line from n λ = d sin θ.
///
/// The only categorical-series experiment: each line label is paired with the
/// first-order diffraction angle of that line's wavelength. Arguments past
/// the grating limit clamp to 90°.
pub fn mercury_spectrum() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "2. Wavelengths of Mercury Spectrum",
        "Using a diffraction grating, the wavelengths of mercury's spectral lines are measured from the diffraction angles.",
        "Calculate wavelengths of mercury spectral lines using diffraction grating.",
        "nλ = d sin θ",
        vec![
            ParameterSpec::real("Grating spacing (μm)", 0.1, 5.0, 0.01, 1.0).unwrap(),
            ParameterSpec::integer("Diffraction order (n)", 1.0, 5.0, 1.0, 1.0).unwrap(),
        ],
        |args| {
            let [d, n] = unpack(args)?;
            let labels = MERCURY_LINES.iter().map(|(name, _)| name.to_string()).collect();
            let ys = MERCURY_LINES
                .iter()
                .map(|&(_, wl)| (n * wl / d).clamp(-1.0, 1.0).asin().to_degrees())
                .collect::<Array1<f64>>();
            Ok(SimOutput::Curve(Series::Categorical { labels, ys }))
        },
    )
    .unwrap()
}

/// 3. Brewster's law: reflected amplitude against incidence angle for a
/// given refractive index.
pub fn brewsters_law() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "3. Verification of Brewster's Law",
        "Brewster's angle is the angle of incidence where reflected light is completely polarized.",
        "Verify Brewster's law and calculate Brewster's angle.",
        "θ_B = arctan(n₂ / n₁)",
        vec![ParameterSpec::real("Refractive index n₂", 1.0, 3.0, 0.01, 1.5).unwrap()],
        |args| {
            let [n2] = unpack(args)?;
            let xs = Array1::linspace(0.0, 90.0, 180);
            let ys = xs.mapv(|x: f64| x.to_radians().cos().abs() * (n2 - 1.0) / (n2 + 1.0));
            Ok(SimOutput::Curve(Series::Numeric { xs, ys }))
        },
    )
    .unwrap()
}

/// 4. Laser wavelength by diffraction grating: d n sin θ over the incidence
/// range.
pub fn laser_grating() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "4. Wavelength of Laser Light using Diffraction Grating",
        "Laser wavelength can be determined using diffraction grating by measuring the diffraction angles.",
        "Determine laser light wavelength using grating and diffraction order.",
        "nλ = d sin θ",
        vec![
            ParameterSpec::real("Grating spacing (μm)", 0.1, 5.0, 0.01, 1.0).unwrap(),
            ParameterSpec::integer("Diffraction order (n)", 1.0, 5.0, 1.0, 1.0).unwrap(),
        ],
        |args| {
            let [d, n] = unpack(args)?;
            let xs = Array1::linspace(0.0, 90.0, 180);
            let ys = xs.mapv(|x: f64| x.to_radians().sin() * d * n);
            Ok(SimOutput::Curve(Series::Numeric { xs, ys }))
        },
    )
    .unwrap()
}

/// 8. Single-slit diffraction: intensity profile I = I₀ (sin β / β)².
///
/// The slit width is part of the control set but the reference profile is
/// driven by the wavelength alone.
pub fn slit_diffraction() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "8. Diffraction of Light through Slit",
        "Light diffraction occurs when it passes through a narrow slit causing spreading of waves.",
        "Observe diffraction pattern and intensity variation.",
        "I = I₀ (sinβ/β)²",
        vec![
            ParameterSpec::real("Slit width (mm)", 0.01, 1.0, 0.01, 0.2).unwrap(),
            ParameterSpec::real("Wavelength (μm)", 0.0003, 0.0008, 0.00001, 0.0006).unwrap(),
        ],
        |args| {
            let [_a, wl] = unpack(args)?;
            let xs = Array1::linspace(-0.02, 0.02, 400);
            let ys = xs.mapv(|x| sinc(x / wl).powi(2));
            Ok(SimOutput::Curve(Series::Numeric { xs, ys }))
        },
    )
    .unwrap()
}

/// 16. Numerical aperture of an optical fiber: NA = sin θ over the
/// acceptance-angle range.
pub fn numerical_aperture() -> ExperimentDefinition {
    ExperimentDefinition::new(
        "16. Determination of Numerical Aperture of Optical Fiber",
        "Numerical aperture defines light acceptance angle of an optical fiber.",
        "Find NA using acceptance angle measurement.",
        "NA = sin(θ)",
        vec![ParameterSpec::integer("Acceptance angle (°)", 10.0, 90.0, 1.0, 30.0).unwrap()],
        |args| {
            let [_theta] = unpack(args)?;
            let xs = Array1::linspace(10.0, 90.0, 100);
            let ys = xs.mapv(|x: f64| x.to_radians().sin());
            Ok(SimOutput::Curve(Series::Numeric { xs, ys }))
        },
    )
    .unwrap()
}
