//! Common utilities for hydraulic calculations.

use crate::error::{HydraulicsError, HydraulicsResult};
use gf_core::numeric::{ensure_finite, ensure_positive};

/// Ensure a value is finite, returning HydraulicsError if not.
pub fn check_finite(value: f64, what: &'static str) -> HydraulicsResult<f64> {
    ensure_finite(value, what).map_err(|_| HydraulicsError::NonPhysical { what })
}

/// Ensure a value is finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> HydraulicsResult<f64> {
    ensure_positive(value, what).map_err(|_| HydraulicsError::NonPhysical { what })
}
