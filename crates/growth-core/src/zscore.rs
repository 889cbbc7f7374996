//! The LMS z-score transformation.

use growth_model::Lms;

use crate::error::EvaluateError;

/// Convert a raw measurement into a standardized z-score given the Box-Cox
/// LMS coefficients for the matched reference row.
///
/// Uses the standard LMS formula: `((x / M)^L - 1) / (L * S)`, degenerating
/// to `ln(x / M) / S` when L is zero. Pure double-precision arithmetic.
///
/// # Errors
///
/// Returns [`EvaluateError::InvalidMeasurement`] when the measurement or the
/// coefficients would produce a non-finite result (measurement, M, or S not
/// strictly positive).
pub fn lms_zscore(measurement: f64, lms: &Lms) -> Result<f64, EvaluateError> {
    if !measurement.is_finite() || measurement <= 0.0 {
        return Err(EvaluateError::InvalidMeasurement {
            message: format!("measurement must be a positive number, got {measurement}"),
        });
    }
    if lms.m <= 0.0 || lms.s <= 0.0 {
        return Err(EvaluateError::InvalidMeasurement {
            message: format!(
                "reference coefficients out of range (M = {}, S = {})",
                lms.m, lms.s
            ),
        });
    }

    let ratio = measurement / lms.m;
    let z = if lms.l == 0.0 {
        ratio.ln() / lms.s
    } else {
        (ratio.powf(lms.l) - 1.0) / (lms.l * lms.s)
    };
    Ok(z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lms(l: f64, m: f64, s: f64) -> Lms {
        Lms { l, m, s }
    }

    #[test]
    fn median_measurement_is_zero() {
        let z = lms_zscore(12.1515, &lms(-0.0137, 12.1515, 0.11426)).unwrap();
        assert_eq!(z, 0.0);
    }

    #[test]
    fn matches_reference_computation() {
        // Boys weight-for-age at 24 months, weight 12.3 kg.
        let z = lms_zscore(12.3, &lms(-0.0137, 12.1515, 0.11426)).unwrap();
        assert!((z - 0.106298).abs() < 1e-5, "got {z}");

        // L = 1 reduces to the plain standardized distance.
        let z = lms_zscore(45.0, &lms(1.0, 49.1477, 0.0379)).unwrap();
        assert!((z - -2.226717).abs() < 1e-5, "got {z}");
    }

    #[test]
    fn zero_l_uses_log_branch() {
        let z = lms_zscore(10.0, &lms(0.0, 5.0, 0.1)).unwrap();
        assert!((z - (2.0_f64).ln() / 0.1).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_measurement() {
        assert!(lms_zscore(0.0, &lms(1.0, 50.0, 0.04)).is_err());
        assert!(lms_zscore(-3.0, &lms(1.0, 50.0, 0.04)).is_err());
        assert!(lms_zscore(f64::NAN, &lms(1.0, 50.0, 0.04)).is_err());
    }

    #[test]
    fn rejects_degenerate_coefficients() {
        assert!(lms_zscore(10.0, &lms(1.0, 0.0, 0.04)).is_err());
        assert!(lms_zscore(10.0, &lms(1.0, 50.0, -0.1)).is_err());
    }
}
