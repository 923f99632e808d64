//! Stepping loop and result recording.

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::strategy::{FixedGate, GateCommand, GateStrategy, PidGate};
use gf_controls::{ErrorSample, ErrorTracker};
use gf_core::numeric::series_max;
use gf_core::units::{Time, m, m3ps, s};
use gf_hydraulics::{Reservoir, SluiceGate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Which gate strategy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimMode {
    /// PID-driven gate.
    Controlled,
    /// Gate held at the reference opening.
    FixedGate,
}

impl SimMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SimMode::Controlled => "controlled",
            SimMode::FixedGate => "fixed",
        }
    }
}

impl fmt::Display for SimMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aligned series produced by a run, one entry per inflow value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimRecord {
    pub mode: SimMode,
    pub dt_s: f64,
    pub setpoint: f64,
    pub inflow: Vec<f64>,
    pub outflow: Vec<f64>,
    pub level: Vec<f64>,
    pub gate: Vec<f64>,
    pub error: Vec<f64>,
    pub accumulated_error: Vec<f64>,
    /// Control signal, present for controlled runs only.
    pub control: Option<Vec<f64>>,
    /// Steps where the gate sat on a bound because of saturation.
    pub saturated_steps: usize,
}

impl SimRecord {
    fn with_capacity(mode: SimMode, dt_s: f64, setpoint: f64, n: usize) -> Self {
        Self {
            mode,
            dt_s,
            setpoint,
            inflow: Vec::with_capacity(n),
            outflow: Vec::with_capacity(n),
            level: Vec::with_capacity(n),
            gate: Vec::with_capacity(n),
            error: Vec::with_capacity(n),
            accumulated_error: Vec::with_capacity(n),
            control: match mode {
                SimMode::Controlled => Some(Vec::with_capacity(n)),
                SimMode::FixedGate => None,
            },
            saturated_steps: 0,
        }
    }

    fn push(
        &mut self,
        inflow: f64,
        outflow: f64,
        level: f64,
        cmd: GateCommand,
        sample: ErrorSample,
    ) {
        self.inflow.push(inflow);
        self.outflow.push(outflow);
        self.level.push(level);
        self.gate.push(cmd.opening);
        self.error.push(sample.error);
        self.accumulated_error.push(sample.accumulated);
        if let (Some(control), Some(u)) = (self.control.as_mut(), cmd.signal) {
            control.push(u);
        }
        if cmd.saturated {
            self.saturated_steps += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.level.len()
    }

    pub fn is_empty(&self) -> bool {
        self.level.is_empty()
    }

    /// Setpoint expanded to one value per step.
    pub fn setpoint_series(&self) -> Vec<f64> {
        vec![self.setpoint; self.len()]
    }

    /// Time of each step, `t * dt` (s).
    pub fn times(&self) -> Vec<f64> {
        (0..self.len()).map(|t| t as f64 * self.dt_s).collect()
    }

    pub fn max_level(&self) -> Option<f64> {
        series_max(&self.level)
    }

    pub fn max_outflow(&self) -> Option<f64> {
        series_max(&self.outflow)
    }
}

/// Outlet gate and reservoir for one run.
struct Plant {
    gate: SluiceGate,
    reservoir: Reservoir,
    dt: Time,
}

impl Plant {
    fn outflow(&self, level: f64, cmd: &GateCommand) -> SimResult<f64> {
        Ok(self.gate.discharge(m(level), m(cmd.opening))?.value)
    }

    fn next_level(&self, level: f64, inflow: f64, outflow: f64) -> SimResult<f64> {
        Ok(self
            .reservoir
            .next_level(m(level), m3ps(inflow), m3ps(outflow), self.dt)?
            .value)
    }
}

/// State produced by one transition.
struct Advanced {
    level: f64,
    cmd: GateCommand,
    sample: ErrorSample,
    outflow: f64,
}

/// Transition from step `t - 1` to step `t`.
fn advance<G: GateStrategy>(
    plant: &Plant,
    tracker: &mut ErrorTracker,
    strategy: &mut G,
    t: usize,
    prev_level: f64,
    prev_inflow: f64,
    prev_outflow: f64,
) -> SimResult<Advanced> {
    let level = plant.next_level(prev_level, prev_inflow, prev_outflow)?;
    let sample = tracker.observe(level)?;
    let cmd = strategy.update(t, &sample)?;
    let outflow = plant.outflow(level, &cmd)?;
    Ok(Advanced {
        level,
        cmd,
        sample,
        outflow,
    })
}

/// Run the stepping loop with a gate strategy.
///
/// Step 0 seeds level, error terms, gate command and outflow from the
/// configuration. Every later step advances the level with the previous
/// step's inflow and outflow, updates the error terms, asks the strategy for
/// a gate command and evaluates the outlet discharge. The first failure
/// aborts the run.
pub fn run_sim<G: GateStrategy>(
    config: &SimConfig,
    inflow: &[f64],
    strategy: &mut G,
) -> SimResult<SimRecord> {
    if inflow.is_empty() {
        return Err(SimError::EmptyInflow);
    }
    if let Some((index, &value)) = inflow.iter().enumerate().find(|(_, q)| !q.is_finite()) {
        return Err(SimError::InvalidInflow { index, value });
    }
    config.validate()?;

    let plant = Plant {
        gate: config.gate()?,
        reservoir: config.reservoir()?,
        dt: s(config.dt_s),
    };
    let mode = strategy.mode();
    let n = inflow.len();

    info!(
        %mode,
        gate = plant.gate.name(),
        steps = n,
        dt_s = config.dt_s,
        "starting gate simulation"
    );

    let mut record = SimRecord::with_capacity(mode, config.dt_s, config.setpoint_m, n);
    let mut tracker = ErrorTracker::new(config.setpoint_m)?;

    let y0 = config.initial_level_m;
    let seed = tracker.seed(y0);
    let cmd = strategy
        .seed(&seed)
        .map_err(|e| SimError::at_step(0, e))?;
    let q0 = plant
        .outflow(y0, &cmd)
        .map_err(|e| SimError::at_step(0, e))?;
    record.push(inflow[0], q0, y0, cmd, seed);

    for t in 1..n {
        let next = advance(
            &plant,
            &mut tracker,
            strategy,
            t,
            record.level[t - 1],
            inflow[t - 1],
            record.outflow[t - 1],
        )
        .map_err(|e| SimError::at_step(t, e))?;

        debug!(
            step = t,
            level = next.level,
            gate = next.cmd.opening,
            q_out = next.outflow,
            signal = next.cmd.signal,
            "step"
        );
        record.push(inflow[t], next.outflow, next.level, next.cmd, next.sample);
    }

    info!(
        %mode,
        steps = record.len(),
        max_level = record.max_level(),
        max_outflow = record.max_outflow(),
        saturated_steps = record.saturated_steps,
        "gate simulation finished"
    );

    Ok(record)
}

/// PID-controlled run.
pub fn run_controlled(config: &SimConfig, inflow: &[f64]) -> SimResult<SimRecord> {
    let mut strategy = PidGate::new(config)?;
    run_sim(config, inflow, &mut strategy)
}

/// Fixed-gate run at the reference opening.
pub fn run_fixed_gate(config: &SimConfig, inflow: &[f64]) -> SimResult<SimRecord> {
    let mut strategy = FixedGate::new(config);
    run_sim(config, inflow, &mut strategy)
}

/// Run one selected variant.
pub fn run_mode(mode: SimMode, config: &SimConfig, inflow: &[f64]) -> SimResult<SimRecord> {
    match mode {
        SimMode::Controlled => run_controlled(config, inflow),
        SimMode::FixedGate => run_fixed_gate(config, inflow),
    }
}

/// Both variants on the same inflow, evaluated concurrently.
///
/// Returns `(controlled, fixed)`.
pub fn run_both(config: &SimConfig, inflow: &[f64]) -> SimResult<(SimRecord, SimRecord)> {
    let (controlled, fixed) = rayon::join(
        || run_controlled(config, inflow),
        || run_fixed_gate(config, inflow),
    );
    Ok((controlled?, fixed?))
}
