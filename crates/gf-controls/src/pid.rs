//! Positional PID law.
//!
//! `u = K * (e + ae*dt/Ti + Td*de/dt)`
//!
//! `ae` is the plain running sum of errors and `de` the backward difference
//! `e[t] - e[t-1]`; both are supplied by the caller.

use crate::error::{ControlError, ControlResult};
use serde::{Deserialize, Serialize};

/// PID tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidGains {
    /// Proportional gain.
    pub k: f64,
    /// Integral time (seconds).
    pub ti: f64,
    /// Derivative time (seconds).
    pub td: f64,
}

/// PID control law with gains fixed for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PidLaw {
    pub gains: PidGains,
}

impl PidLaw {
    /// Create a law. `Ti` must be nonzero, `Td` non-negative, all finite.
    pub fn new(gains: PidGains) -> ControlResult<Self> {
        if !(gains.k.is_finite() && gains.ti.is_finite() && gains.td.is_finite()) {
            return Err(ControlError::InvalidArg {
                what: "gains must be finite",
            });
        }
        if gains.ti == 0.0 {
            return Err(ControlError::DivisionByZero { what: "Ti" });
        }
        if gains.td < 0.0 {
            return Err(ControlError::InvalidArg {
                what: "Td must be non-negative",
            });
        }
        Ok(Self { gains })
    }

    /// Seed signal for the first step: proportional term only.
    ///
    /// The first step has no history, and the recorded behavior of this loop
    /// uses `K * e[0]` rather than the full law. Changing it shifts every
    /// downstream value.
    pub fn seed(&self, error: f64) -> f64 {
        self.gains.k * error
    }

    /// Control signal for one step.
    pub fn control(
        &self,
        error: f64,
        accumulated_error: f64,
        delta_error: f64,
        dt: f64,
    ) -> ControlResult<f64> {
        let PidGains { k, ti, td } = self.gains;
        if ti == 0.0 {
            return Err(ControlError::DivisionByZero { what: "Ti" });
        }
        if dt == 0.0 {
            return Err(ControlError::DivisionByZero { what: "dt" });
        }
        let u = k * (error + accumulated_error * dt / ti + td * delta_error / dt);
        if !u.is_finite() {
            return Err(ControlError::NonFinite { value: u });
        }
        Ok(u)
    }
}
