//! Presentation-boundary formatting
//!
//! The strings the interactive surface shows: the derived scalar in fixed
//! 4-digit scientific notation and the prefixed error line. No structured
//! error code crosses this boundary; the message text is the only payload.

use crate::error::LabError;
use crate::series::RunResult;

/// Format a derived scalar for display: scientific notation, 4 digits of
/// precision (e.g. `6.6260e-34`).
pub fn format_scalar(value: f64) -> String {
    format!("{value:.4e}")
}

/// The scalar line for a run result, when the experiment produced one.
pub fn format_result(result: &RunResult) -> Option<String> {
    result
        .scalar
        .map(|scalar| format!("Calculated Result: {}", format_scalar(scalar)))
}

/// Render a failure as the display string the surface shows, the caught
/// message verbatim behind a distinguishing prefix.
pub fn format_error(error: &LabError) -> String {
    format!("Simulation error: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;
    use ndarray::array;

    #[test]
    fn test_format_scalar() {
        assert_eq!(format_scalar(6.626e-34), "6.6260e-34");
        assert_eq!(format_scalar(1.12), "1.1200e0");
    }

    #[test]
    fn test_format_result() {
        let with_scalar = RunResult {
            series: Series::Numeric {
                xs: array![0.0],
                ys: array![0.0],
            },
            scalar: Some(6.626e-34),
        };
        assert_eq!(
            format_result(&with_scalar).unwrap(),
            "Calculated Result: 6.6260e-34"
        );

        let without = RunResult {
            scalar: None,
            ..with_scalar
        };
        assert_eq!(format_result(&without), None);
    }

    #[test]
    fn test_format_error_keeps_message_verbatim() {
        let err = LabError::Computation("division by zero denominator: B²r²".to_string());
        let text = format_error(&err);
        assert!(text.starts_with("Simulation error: "));
        assert!(text.contains("division by zero denominator: B²r²"));
    }
}
