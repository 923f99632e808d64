//! Gate actuator: maps a control signal to a bounded gate opening.
//!
//! The gate is positioned at `reference + u`, saturating at the physical
//! operating range. Saturation is expected behavior, not an error.

use crate::error::{ControlError, ControlResult};
use gf_core::numeric::clamp_inclusive;
use serde::{Deserialize, Serialize};

/// Positioning of the gate around a reference opening.
///
/// # Example
///
/// ```
/// use gf_controls::GateActuator;
///
/// let act = GateActuator::new(3.0, 2.0, 4.0).unwrap();
/// assert_eq!(act.position(0.5), 3.5);
/// assert_eq!(act.position(1.7), 4.0);
/// assert_eq!(act.position(-1.0), 2.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GateActuator {
    /// Opening when the control signal is zero (m).
    pub reference: f64,
    /// Lower bound of the opening (m).
    pub min: f64,
    /// Upper bound of the opening (m).
    pub max: f64,
}

impl GateActuator {
    pub fn new(reference: f64, min: f64, max: f64) -> ControlResult<Self> {
        if !(reference.is_finite() && min.is_finite() && max.is_finite()) {
            return Err(ControlError::InvalidArg {
                what: "gate positions must be finite",
            });
        }
        if min >= max {
            return Err(ControlError::InvalidArg {
                what: "min must be less than max",
            });
        }
        Ok(Self { reference, min, max })
    }

    /// Unclamped target opening for a control signal.
    pub fn target(&self, signal: f64) -> f64 {
        signal + self.reference
    }

    /// Gate opening for a control signal.
    ///
    /// `target >= max` gives exactly `max`, `target <= min` exactly `min`.
    pub fn position(&self, signal: f64) -> f64 {
        clamp_inclusive(self.target(signal), self.min, self.max)
    }

    /// True when the signal drives the gate onto a bound.
    pub fn saturates(&self, signal: f64) -> bool {
        let target = self.target(signal);
        target >= self.max || target <= self.min
    }
}
