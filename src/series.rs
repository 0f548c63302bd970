//! Output series and run results
//!
//! This module defines the shapes a computation can produce and the
//! normalized result the engine hands to the presentation surface. A series
//! is an ordered pair of equal-length sequences suitable for plotting; most
//! experiments produce a numeric domain, one (the mercury spectrum) pairs
//! category labels with computed values, so the categorical case is an
//! explicit second variant rather than a numeric series in disguise.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// A plottable series: ordered domain values paired with computed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Series {
    /// Numeric domain, element-wise paired with computed values.
    Numeric {
        xs: Array1<f64>,
        ys: Array1<f64>,
    },
    /// Category labels (e.g. spectral line names), element-wise paired with
    /// computed values.
    Categorical {
        labels: Vec<String>,
        ys: Array1<f64>,
    },
}

impl Series {
    /// Number of points in the series.
    pub fn len(&self) -> usize {
        match self {
            Series::Numeric { ys, .. } => ys.len(),
            Series::Categorical { ys, .. } => ys.len(),
        }
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The computed values, independent of domain kind.
    pub fn values(&self) -> &Array1<f64> {
        match self {
            Series::Numeric { ys, .. } => ys,
            Series::Categorical { ys, .. } => ys,
        }
    }

    /// Check the series contract: equal-length non-empty sequences, all
    /// computed values finite.
    ///
    /// Returns a message describing the first violation, or `None` if the
    /// series is well-formed. Non-finite values are how f64 arithmetic
    /// expresses the domain errors (division by zero, log/sqrt outside the
    /// domain) that the engine must catch at its boundary.
    pub(crate) fn violation(&self) -> Option<String> {
        let (domain_len, ys) = match self {
            Series::Numeric { xs, ys } => (xs.len(), ys),
            Series::Categorical { labels, ys } => (labels.len(), ys),
        };

        if domain_len != ys.len() {
            return Some(format!(
                "series length mismatch: {} domain values, {} computed values",
                domain_len,
                ys.len()
            ));
        }

        if ys.is_empty() {
            return Some("empty series".to_string());
        }

        if let Series::Numeric { xs, .. } = self {
            if xs.iter().any(|x| !x.is_finite()) {
                return Some("non-finite domain value in series".to_string());
            }
        }

        if ys.iter().any(|y| !y.is_finite()) {
            return Some("non-finite computed value in series".to_string());
        }

        None
    }
}

/// What an experiment's computation returns: a curve, optionally with one
/// derived scalar result.
#[derive(Debug, Clone, PartialEq)]
pub enum SimOutput {
    Curve(Series),
    CurveWithScalar(Series, f64),
}

/// Normalized output of a successful run: the series to plot, plus the
/// derived scalar when the experiment produces one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub series: Series,
    pub scalar: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_series_len() {
        let s = Series::Numeric {
            xs: array![0.0, 1.0, 2.0],
            ys: array![0.0, 1.0, 4.0],
        };
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());

        let s = Series::Categorical {
            labels: vec!["Violet".to_string(), "Green".to_string()],
            ys: array![10.0, 20.0],
        };
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_well_formed_series() {
        let s = Series::Numeric {
            xs: array![0.0, 1.0],
            ys: array![1.0, 2.0],
        };
        assert!(s.violation().is_none());
    }

    #[test]
    fn test_length_mismatch() {
        let s = Series::Numeric {
            xs: array![0.0, 1.0, 2.0],
            ys: array![1.0, 2.0],
        };
        assert!(s.violation().unwrap().contains("length mismatch"));

        let s = Series::Categorical {
            labels: vec!["Violet".to_string()],
            ys: array![1.0, 2.0],
        };
        assert!(s.violation().unwrap().contains("length mismatch"));
    }

    #[test]
    fn test_empty_series() {
        let s = Series::Numeric {
            xs: array![],
            ys: array![],
        };
        assert_eq!(s.violation().unwrap(), "empty series");
    }

    #[test]
    fn test_non_finite_values() {
        let s = Series::Numeric {
            xs: array![0.0, 1.0],
            ys: array![1.0, f64::INFINITY],
        };
        assert!(s.violation().unwrap().contains("non-finite computed"));

        let s = Series::Numeric {
            xs: array![0.0, f64::NAN],
            ys: array![1.0, 2.0],
        };
        assert!(s.violation().unwrap().contains("non-finite domain"));
    }

    #[test]
    fn test_run_result_serialization() {
        let result = RunResult {
            series: Series::Numeric {
                xs: array![0.0, 1.0],
                ys: array![0.5, 1.5],
            },
            scalar: Some(6.626e-34),
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: RunResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
