use crate::GfError;

/// Floating point type used throughout the workspace.
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, GfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GfError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, GfError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(GfError::NotPositive { what, value: v })
    }
}

/// Largest value of a series, `None` when empty. NaN entries are skipped.
pub fn series_max(values: &[Real]) -> Option<Real> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: Real| m.max(v))))
}

/// Smallest value of a series, `None` when empty. NaN entries are skipped.
pub fn series_min(values: &[Real]) -> Option<Real> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: Real| m.min(v))))
}

/// Clamp into `[min, max]` with ties resolved to the bound itself.
///
/// `value >= max` yields exactly `max` and `value <= min` yields exactly `min`.
pub fn clamp_inclusive(value: Real, min: Real, max: Real) -> Real {
    if value >= max {
        max
    } else if value <= min {
        min
    } else {
        value
    }
}

/// Round to a fixed number of decimals, as used for reported statistics.
pub fn round_to(v: Real, decimals: u32) -> Real {
    let scale = 10f64.powi(decimals as i32);
    (v * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(1.0, "area").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "area"),
            Err(GfError::NotPositive { what: "area", .. })
        ));
        assert!(ensure_positive(-2.0, "area").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "area"),
            Err(GfError::NonFinite { .. })
        ));
    }

    #[test]
    fn series_extrema() {
        assert_eq!(series_max(&[]), None);
        assert_eq!(series_max(&[1.0, 3.5, 2.0]), Some(3.5));
        assert_eq!(series_min(&[1.0, 3.5, -2.0]), Some(-2.0));
        assert_eq!(series_max(&[Real::NAN, 1.0]), Some(1.0));
    }

    #[test]
    fn clamp_inclusive_ties_go_to_bounds() {
        assert_eq!(clamp_inclusive(5.0, 2.0, 4.0), 4.0);
        assert_eq!(clamp_inclusive(4.0, 2.0, 4.0), 4.0);
        assert_eq!(clamp_inclusive(1.0, 2.0, 4.0), 2.0);
        assert_eq!(clamp_inclusive(2.0, 2.0, 4.0), 2.0);
        assert_eq!(clamp_inclusive(3.25, 2.0, 4.0), 3.25);
    }

    #[test]
    fn round_to_two_decimals() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(33.194760175449225, 2), 33.19);
    }
}
