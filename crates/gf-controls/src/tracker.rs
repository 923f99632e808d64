//! Tracking-error bookkeeping for the gate loop.

use crate::error::{ControlError, ControlResult};
use serde::{Deserialize, Serialize};

/// Error terms for one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorSample {
    /// `level - setpoint`.
    pub error: f64,
    /// Running sum of `error` up to and including this step.
    pub accumulated: f64,
    /// `error[t] - error[t-1]`; zero at the seed step.
    pub delta: f64,
}

/// Running error state: `e[t] = y[t] - sp`, `ae[t] = ae[t-1] + e[t]`.
///
/// The sum is not scaled by step count or `dt`; scaling happens in the law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorTracker {
    setpoint: f64,
    last: Option<ErrorSample>,
}

impl ErrorTracker {
    pub fn new(setpoint: f64) -> ControlResult<Self> {
        if !setpoint.is_finite() {
            return Err(ControlError::InvalidArg {
                what: "setpoint must be finite",
            });
        }
        Ok(Self {
            setpoint,
            last: None,
        })
    }

    pub fn setpoint(&self) -> f64 {
        self.setpoint
    }

    /// Most recent sample, `None` before the first observation.
    pub fn last(&self) -> Option<&ErrorSample> {
        self.last.as_ref()
    }

    /// First observation: `ae[0] = e[0]`, no delta.
    pub fn seed(&mut self, level: f64) -> ErrorSample {
        let error = level - self.setpoint;
        let sample = ErrorSample {
            error,
            accumulated: error,
            delta: 0.0,
        };
        self.last = Some(sample);
        sample
    }

    /// Subsequent observation. Fails if the tracker was never seeded.
    pub fn observe(&mut self, level: f64) -> ControlResult<ErrorSample> {
        let prev = self.last.ok_or(ControlError::StateError {
            what: "error tracker observed before seed",
        })?;
        let error = level - self.setpoint;
        let sample = ErrorSample {
            error,
            accumulated: error + prev.accumulated,
            delta: error - prev.error,
        };
        self.last = Some(sample);
        Ok(sample)
    }
}
