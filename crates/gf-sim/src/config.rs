//! Run parameters.

use crate::error::{SimError, SimResult};
use gf_controls::{GateActuator, PidGains};
use gf_core::units::{m, m2};
use gf_hydraulics::{GateLimits, Reservoir, SiteConstants, SluiceGate};
use serde::{Deserialize, Serialize};

/// Immutable parameter set for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Target water level (m).
    pub setpoint_m: f64,
    /// Reservoir surface area (m^2).
    pub area_m2: f64,
    /// Gate width (m).
    pub gate_width_m: f64,
    /// Coefficient of contraction.
    pub contraction_coeff: f64,
    /// Step duration (s).
    pub dt_s: f64,
    /// Water level at step 0 (m).
    pub initial_level_m: f64,
    /// Gate opening at zero control signal, and the fixed opening (m).
    pub reference_opening_m: f64,
    pub gains: PidGains,
    pub limits: GateLimits,
    pub site: SiteConstants,
}

impl SimConfig {
    /// Parameters of the studied reservoir and outlet.
    pub fn reference_case() -> Self {
        Self {
            setpoint_m: 3.5,
            area_m2: 1.0e7,
            gate_width_m: 3.0,
            contraction_coeff: 0.61,
            dt_s: 7200.0,
            initial_level_m: 3.0,
            reference_opening_m: 3.0,
            gains: PidGains {
                k: 1.25,
                ti: 8.5e6,
                td: 25_500.0,
            },
            limits: GateLimits::default(),
            site: SiteConstants::default(),
        }
    }

    /// Checks shared by both strategies.
    pub fn validate(&self) -> SimResult<()> {
        if !self.setpoint_m.is_finite() {
            return Err(SimError::InvalidArg {
                what: "setpoint must be finite",
            });
        }
        if !self.dt_s.is_finite() {
            return Err(SimError::InvalidArg {
                what: "dt must be finite",
            });
        }
        if !self.initial_level_m.is_finite() {
            return Err(SimError::InvalidArg {
                what: "initial level must be finite",
            });
        }
        if !self.limits.contains(self.reference_opening_m) {
            return Err(SimError::InvalidArg {
                what: "reference opening must lie within the gate limits",
            });
        }
        Ok(())
    }

    pub fn gate(&self) -> SimResult<SluiceGate> {
        let limits = GateLimits::new(self.limits.min_m, self.limits.max_m)?;
        Ok(
            SluiceGate::new("outlet".into(), m(self.gate_width_m), self.contraction_coeff)?
                .with_limits(limits)
                .with_site(self.site),
        )
    }

    pub fn reservoir(&self) -> SimResult<Reservoir> {
        Ok(Reservoir::new(m2(self.area_m2))?)
    }

    pub fn actuator(&self) -> SimResult<GateActuator> {
        Ok(GateActuator::new(
            self.reference_opening_m,
            self.limits.min_m,
            self.limits.max_m,
        )?)
    }
}
