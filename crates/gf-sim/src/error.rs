//! Error types for simulation runs.

use gf_controls::ControlError;
use gf_hydraulics::HydraulicsError;
use thiserror::Error;

/// Errors encountered during a simulation run. None are recovered from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Inflow series is empty: nothing to simulate")]
    EmptyInflow,

    #[error("Non-finite inflow at step {index}: {value}")]
    InvalidInflow { index: usize, value: f64 },

    #[error("Hydraulics error: {0}")]
    Hydraulics(#[from] HydraulicsError),

    #[error("Control error: {0}")]
    Control(#[from] ControlError),

    #[error("Step {step} failed: {source}")]
    Step {
        step: usize,
        #[source]
        source: Box<SimError>,
    },
}

pub type SimResult<T> = Result<T, SimError>;

impl SimError {
    pub(crate) fn at_step(step: usize, source: SimError) -> Self {
        SimError::Step {
            step,
            source: Box::new(source),
        }
    }

    /// Innermost error, unwrapping step context.
    pub fn root(&self) -> &SimError {
        match self {
            SimError::Step { source, .. } => source.root(),
            other => other,
        }
    }
}
