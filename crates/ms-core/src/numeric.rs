use crate::CoreError;

pub fn ensure_finite(v: f64, what: &str) -> Result<f64, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite {
            what: what.to_string(),
            value: v,
        })
    }
}

/// True when every element is strictly greater than its predecessor.
pub fn strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "chi_gap_left").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
        assert!(msg.contains("chi_gap_left"));
        assert_eq!(ensure_finite(0.5, "x").unwrap(), 0.5);
    }

    #[test]
    fn strictly_increasing_rejects_ties() {
        assert!(strictly_increasing(&[0.0, 1.0, 2.0]));
        assert!(!strictly_increasing(&[0.0, 1.0, 1.0]));
        assert!(!strictly_increasing(&[0.0, f64::NAN, 1.0]));
        assert!(strictly_increasing(&[]));
    }
}
