//! Parameter specification definition
//!
//! This module provides the ParameterSpec struct, which describes one bounded
//! numeric input of an experiment: inclusive bounds, a suggested step, a
//! default value, and the numeric kind that drives integer vs. real control
//! behavior. All validation happens at construction; a spec that exists is a
//! spec that is well-formed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing parameter specifications
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Invalid bounds: min ({min}) must not exceed max ({max})")]
    InvalidBounds { min: f64, max: f64 },

    #[error("Default value {default} for '{label}' is outside bounds: [{min}, {max}]")]
    DefaultOutsideBounds {
        label: String,
        default: f64,
        min: f64,
        max: f64,
    },

    #[error("Duplicate parameter label '{label}'")]
    DuplicateLabel { label: String },
}

/// Numeric kind of a parameter, decided once at catalog construction.
///
/// The kind determines whether the resolved control rounds to integers or
/// accepts fractional values. It is explicit data on the spec, never inferred
/// from a value's representation at use time: the catalog deliberately mixes
/// integer and real specs within the same formula family (an integer default
/// between fractional bounds is valid and common).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKind {
    Integer,
    Real,
}

/// Description of one bounded numeric input of an experiment.
///
/// The label doubles as the lookup key for the corresponding input value at
/// run time. Bounds are inclusive; `min <= default <= max` is guaranteed by
/// construction. The declared step may be zero (a defect category in the
/// catalog data); it is corrected by the resolver, never surfaced as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Human-readable name, unique within an experiment
    pub label: String,

    /// Inclusive lower bound
    pub min: f64,

    /// Inclusive upper bound
    pub max: f64,

    /// Suggested increment; zero is representable but never surfaced
    pub step: f64,

    /// Initial value, within `[min, max]`
    pub default: f64,

    /// Integer or real control behavior
    pub kind: ParamKind,
}

impl ParameterSpec {
    /// Create a new parameter specification with the given kind
    ///
    /// # Arguments
    ///
    /// * `label` - Name of the parameter, unique within its experiment
    /// * `min` - Inclusive lower bound
    /// * `max` - Inclusive upper bound
    /// * `step` - Suggested increment (zero allowed, resolved later)
    /// * `default` - Initial value
    /// * `kind` - Integer or real control behavior
    ///
    /// # Returns
    ///
    /// A new spec if `min <= max` and `min <= default <= max`, or an error
    /// otherwise.
    pub fn new(
        label: &str,
        min: f64,
        max: f64,
        step: f64,
        default: f64,
        kind: ParamKind,
    ) -> Result<Self, ParameterError> {
        if min > max {
            return Err(ParameterError::InvalidBounds { min, max });
        }

        if default < min || default > max {
            return Err(ParameterError::DefaultOutsideBounds {
                label: label.to_string(),
                default,
                min,
                max,
            });
        }

        Ok(Self {
            label: label.to_string(),
            min,
            max,
            step,
            default,
            kind,
        })
    }

    /// Create an integer-kind parameter specification
    ///
    /// Bounds and step stay as declared (they may be fractional in the
    /// catalog data even for integer controls); the kind alone decides how
    /// the resolver casts them.
    ///
    /// # Examples
    ///
    /// ```
    /// use physlab_rs::parameters::{ParamKind, ParameterSpec};
    ///
    /// let spec = ParameterSpec::integer("Ring order (n)", 1.0, 20.0, 1.0, 1.0).unwrap();
    /// assert_eq!(spec.kind, ParamKind::Integer);
    /// ```
    pub fn integer(
        label: &str,
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    ) -> Result<Self, ParameterError> {
        Self::new(label, min, max, step, default, ParamKind::Integer)
    }

    /// Create a real-kind parameter specification
    ///
    /// # Examples
    ///
    /// ```
    /// use physlab_rs::parameters::{ParamKind, ParameterSpec};
    ///
    /// let spec = ParameterSpec::real("Refractive index n₂", 1.0, 3.0, 0.01, 1.5).unwrap();
    /// assert_eq!(spec.kind, ParamKind::Real);
    /// ```
    pub fn real(
        label: &str,
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    ) -> Result<Self, ParameterError> {
        Self::new(label, min, max, step, default, ParamKind::Real)
    }

    /// Check whether a value lies within the spec's inclusive bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
