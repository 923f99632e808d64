//! Gate update strategies plugged into the stepping loop.

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::sim::SimMode;
use gf_controls::{ErrorSample, GateActuator, PidLaw};
use tracing::warn;

/// Gate position (and control signal, if any) for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateCommand {
    /// Gate opening within the operating range (m).
    pub opening: f64,
    /// Control signal, `None` for uncontrolled gates.
    pub signal: Option<f64>,
    /// The command sits on an operating bound because of saturation.
    pub saturated: bool,
}

/// How the gate moves from one step to the next.
pub trait GateStrategy {
    fn mode(&self) -> SimMode;

    /// Command for step 0, from the seed error sample.
    fn seed(&mut self, sample: &ErrorSample) -> SimResult<GateCommand>;

    /// Command for step `t >= 1`.
    fn update(&mut self, step: usize, sample: &ErrorSample) -> SimResult<GateCommand>;
}

/// PID-driven gate: `gate[t] = clamp(reference + u[t])`.
#[derive(Debug, Clone)]
pub struct PidGate {
    law: PidLaw,
    actuator: GateActuator,
    dt_s: f64,
    saturated: bool,
}

impl PidGate {
    pub fn new(config: &SimConfig) -> SimResult<Self> {
        Ok(Self {
            law: PidLaw::new(config.gains)?,
            actuator: config.actuator()?,
            dt_s: config.dt_s,
            saturated: false,
        })
    }
}

impl GateStrategy for PidGate {
    fn mode(&self) -> SimMode {
        SimMode::Controlled
    }

    /// `u[0] = K*e[0]` and the gate starts at the reference opening,
    /// whatever `u[0]` says.
    fn seed(&mut self, sample: &ErrorSample) -> SimResult<GateCommand> {
        Ok(GateCommand {
            opening: self.actuator.reference,
            signal: Some(self.law.seed(sample.error)),
            saturated: false,
        })
    }

    fn update(&mut self, step: usize, sample: &ErrorSample) -> SimResult<GateCommand> {
        let u = self
            .law
            .control(sample.error, sample.accumulated, sample.delta, self.dt_s)?;
        let saturated = self.actuator.saturates(u);
        if saturated && !self.saturated {
            warn!(
                step,
                requested_opening = self.actuator.target(u),
                "gate saturated at operating limit"
            );
        }
        self.saturated = saturated;
        Ok(GateCommand {
            opening: self.actuator.position(u),
            signal: Some(u),
            saturated,
        })
    }
}

/// Uncontrolled gate held at the reference opening.
#[derive(Debug, Clone)]
pub struct FixedGate {
    opening: f64,
}

impl FixedGate {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            opening: config.reference_opening_m,
        }
    }

    fn command(&self) -> GateCommand {
        GateCommand {
            opening: self.opening,
            signal: None,
            saturated: false,
        }
    }
}

impl GateStrategy for FixedGate {
    fn mode(&self) -> SimMode {
        SimMode::FixedGate
    }

    fn seed(&mut self, _sample: &ErrorSample) -> SimResult<GateCommand> {
        Ok(self.command())
    }

    fn update(&mut self, _step: usize, _sample: &ErrorSample) -> SimResult<GateCommand> {
        Ok(self.command())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use gf_controls::{ControlError, PidGains};

    fn sample(error: f64, accumulated: f64, delta: f64) -> ErrorSample {
        ErrorSample {
            error,
            accumulated,
            delta,
        }
    }

    #[test]
    fn pid_seed_ignores_signal_for_position() {
        let mut g = PidGate::new(&SimConfig::reference_case()).unwrap();
        let cmd = g.seed(&sample(-0.5, -0.5, 0.0)).unwrap();
        assert_eq!(cmd.opening, 3.0);
        assert_eq!(cmd.signal, Some(-0.625));
    }

    #[test]
    fn pid_update_saturates_high() {
        let mut g = PidGate::new(&SimConfig::reference_case()).unwrap();
        // K * e = 1.25 * 2.0 = 2.5 -> target 5.5
        let cmd = g.update(1, &sample(2.0, 0.0, 0.0)).unwrap();
        assert_eq!(cmd.opening, 4.0);
        assert!(cmd.saturated);
        assert_eq!(cmd.signal, Some(2.5));
    }

    #[test]
    fn pid_zero_dt_is_an_error() {
        let cfg = SimConfig {
            dt_s: 0.0,
            ..SimConfig::reference_case()
        };
        let mut g = PidGate::new(&cfg).unwrap();
        let err = g.update(1, &sample(0.1, 0.1, 0.0)).unwrap_err();
        assert_eq!(
            err,
            SimError::Control(ControlError::DivisionByZero { what: "dt" })
        );
    }

    #[test]
    fn pid_zero_ti_rejected_at_construction() {
        let cfg = SimConfig {
            gains: PidGains {
                ti: 0.0,
                ..SimConfig::reference_case().gains
            },
            ..SimConfig::reference_case()
        };
        assert!(matches!(
            PidGate::new(&cfg),
            Err(SimError::Control(ControlError::DivisionByZero { what: "Ti" }))
        ));
    }

    #[test]
    fn fixed_gate_never_moves() {
        let mut g = FixedGate::new(&SimConfig::reference_case());
        assert_eq!(g.seed(&sample(-3.0, -3.0, 0.0)).unwrap().opening, 3.0);
        let cmd = g.update(5, &sample(9.0, 40.0, 1.0)).unwrap();
        assert_eq!(cmd.opening, 3.0);
        assert_eq!(cmd.signal, None);
    }
}
